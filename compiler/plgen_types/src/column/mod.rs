//! Typed column descriptors.

use std::fmt;

/// A PostgreSQL column type, the typed form of an override.
///
/// `Display` renders the type name exactly as it appears in a routine
/// header.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Integer,
    SmallInteger,
    BigInteger,
    Float,
    Boolean,
    Numeric {
        precision: Option<u32>,
        scale: Option<u32>,
    },
    Date,
    DateTime {
        timezone: bool,
    },
    Time {
        timezone: bool,
    },
    Interval,
    Null,
    LargeBinary,
    Unicode {
        length: Option<u32>,
    },
    Text,
    Array(Box<ColumnType>),
}

impl ColumnType {
    /// `NUMERIC` with no precision or scale.
    pub const NUMERIC: ColumnType = ColumnType::Numeric {
        precision: None,
        scale: None,
    };

    /// `VARCHAR` with no length.
    pub const VARCHAR: ColumnType = ColumnType::Unicode { length: None };

    /// Array of `self`.
    #[must_use]
    pub fn array(self) -> ColumnType {
        ColumnType::Array(Box::new(self))
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Integer => f.write_str("INTEGER"),
            ColumnType::SmallInteger => f.write_str("SMALLINT"),
            ColumnType::BigInteger => f.write_str("BIGINT"),
            ColumnType::Float => f.write_str("FLOAT"),
            ColumnType::Boolean => f.write_str("BOOLEAN"),
            ColumnType::Numeric { precision, scale } => {
                f.write_str("NUMERIC")?;
                match (precision, scale) {
                    (Some(p), Some(s)) => write!(f, "({p}, {s})"),
                    (Some(p), None) => write!(f, "({p})"),
                    _ => Ok(()),
                }
            }
            ColumnType::Date => f.write_str("DATE"),
            ColumnType::DateTime { timezone } => {
                write!(f, "TIMESTAMP {} TIME ZONE", with_or_without(*timezone))
            }
            ColumnType::Time { timezone } => {
                write!(f, "TIME {} TIME ZONE", with_or_without(*timezone))
            }
            ColumnType::Interval => f.write_str("INTERVAL"),
            ColumnType::Null => f.write_str("NULL"),
            ColumnType::LargeBinary => f.write_str("BYTEA"),
            ColumnType::Unicode { length: None } => f.write_str("VARCHAR"),
            ColumnType::Unicode { length: Some(n) } => write!(f, "VARCHAR({n})"),
            ColumnType::Text => f.write_str("TEXT"),
            ColumnType::Array(elem) => write!(f, "{elem}[]"),
        }
    }
}

fn with_or_without(timezone: bool) -> &'static str {
    if timezone {
        "WITH"
    } else {
        "WITHOUT"
    }
}
