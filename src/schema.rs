use std::fmt;

/// Declared type of a schema field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Whole number (dataset sizes, tree heights, rotation counts)
    Int,
    /// Floating-point measurement (timings)
    Float,
    /// Free-form string token (e.g. a source-type label like "CSV")
    Label,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Int => write!(f, "integer"),
            FieldKind::Float => write!(f, "number"),
            FieldKind::Label => write!(f, "label"),
        }
    }
}

/// One named field in a positional argument schema: `count` consecutive
/// tokens of kind `kind`.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    pub count: usize,
}

impl Field {
    pub const fn ints(name: &'static str, count: usize) -> Self {
        Field {
            name,
            kind: FieldKind::Int,
            count,
        }
    }

    pub const fn floats(name: &'static str, count: usize) -> Self {
        Field {
            name,
            kind: FieldKind::Float,
            count,
        }
    }

    pub const fn label(name: &'static str) -> Self {
        Field {
            name,
            kind: FieldKind::Label,
            count: 1,
        }
    }
}

/// Ordered positional argument schema for one chart unit.
///
/// The schema is the full contract: decoding consumes exactly the sum of the
/// field counts, in field order, and fails on any surplus, deficit, or token
/// that does not coerce to its declared kind.
#[derive(Debug, Clone, Copy)]
pub struct ArgSchema {
    name: &'static str,
    fields: &'static [Field],
}

/// Decode failure for a positional argument list
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaViolation {
    #[error("'{schema}' expects {expected} arguments, got {actual} (args: {args:?})")]
    WrongArgCount {
        schema: &'static str,
        expected: usize,
        actual: usize,
        args: Vec<String>,
    },

    #[error("'{schema}' field '{field}': token '{token}' is not a valid {kind}")]
    BadToken {
        schema: &'static str,
        field: &'static str,
        token: String,
        kind: FieldKind,
    },
}

/// Values decoded for a single field
#[derive(Debug, Clone, PartialEq)]
enum FieldValues {
    Ints(Vec<i64>),
    Floats(Vec<f64>),
    Label(String),
}

/// Result of decoding a token list against an [`ArgSchema`].
///
/// Field order and within-field order are preserved, so the i-th value of one
/// field lines up positionally with the i-th value of a companion field.
#[derive(Debug, Clone)]
pub struct Decoded {
    fields: Vec<(&'static str, FieldValues)>,
}

impl ArgSchema {
    pub const fn new(name: &'static str, fields: &'static [Field]) -> Self {
        ArgSchema { name, fields }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &'static [Field] {
        self.fields
    }

    /// Total number of tokens this schema consumes
    pub fn total_count(&self) -> usize {
        self.fields.iter().map(|f| f.count).sum()
    }

    /// Partition `args` into contiguous per-field slices and coerce each
    /// token to its field's declared kind.
    pub fn decode(&self, args: &[String]) -> Result<Decoded, SchemaViolation> {
        let expected = self.total_count();
        if args.len() != expected {
            return Err(SchemaViolation::WrongArgCount {
                schema: self.name,
                expected,
                actual: args.len(),
                args: args.to_vec(),
            });
        }

        let mut fields = Vec::with_capacity(self.fields.len());
        let mut offset = 0;

        for field in self.fields {
            let tokens = &args[offset..offset + field.count];
            offset += field.count;

            let values = match field.kind {
                FieldKind::Int => {
                    let mut values = Vec::with_capacity(field.count);
                    for token in tokens {
                        values.push(token.parse::<i64>().map_err(|_| {
                            self.bad_token(field, token)
                        })?);
                    }
                    FieldValues::Ints(values)
                }
                FieldKind::Float => {
                    let mut values = Vec::with_capacity(field.count);
                    for token in tokens {
                        values.push(token.parse::<f64>().map_err(|_| {
                            self.bad_token(field, token)
                        })?);
                    }
                    FieldValues::Floats(values)
                }
                FieldKind::Label => FieldValues::Label(tokens[0].clone()),
            };

            fields.push((field.name, values));
        }

        Ok(Decoded { fields })
    }

    fn bad_token(&self, field: &Field, token: &str) -> SchemaViolation {
        SchemaViolation::BadToken {
            schema: self.name,
            field: field.name,
            token: token.to_string(),
            kind: field.kind,
        }
    }
}

impl Decoded {
    fn get(&self, name: &str) -> &FieldValues {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
            .unwrap_or_else(|| panic!("no field named '{}' in decoded schema", name))
    }

    /// Integer series for `name`. Panics if the field does not exist or has a
    /// different kind; units only look up fields their own schema declares.
    pub fn ints(&self, name: &str) -> &[i64] {
        match self.get(name) {
            FieldValues::Ints(values) => values,
            other => panic!("field '{}' is not an integer field: {:?}", name, other),
        }
    }

    /// Float series for `name`
    pub fn floats(&self, name: &str) -> &[f64] {
        match self.get(name) {
            FieldValues::Floats(values) => values,
            other => panic!("field '{}' is not a float field: {:?}", name, other),
        }
    }

    /// Label value for `name`
    pub fn label(&self, name: &str) -> &str {
        match self.get(name) {
            FieldValues::Label(value) => value,
            other => panic!("field '{}' is not a label field: {:?}", name, other),
        }
    }

    /// Single-value convenience accessors for count-1 fields
    pub fn int(&self, name: &str) -> i64 {
        self.ints(name)[0]
    }

    pub fn float(&self, name: &str) -> f64 {
        self.floats(name)[0]
    }
}

/// Convert an owned &str list into the owned token form used by decoders.
/// Handy in tests and anywhere tokens arrive as literals.
pub fn tokens(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}
