//! The native Python types with a built-in PostgreSQL mapping.

use crate::ColumnType;

/// A Python type that maps to a PostgreSQL type without configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NativeType {
    Int,
    Float,
    Bool,
    Decimal,
    Date,
    DateTime,
    Time,
    TimeDelta,
    None,
    Bytes,
    Str,
}

impl NativeType {
    pub const ALL: [NativeType; 11] = [
        NativeType::Int,
        NativeType::Float,
        NativeType::Bool,
        NativeType::Decimal,
        NativeType::Date,
        NativeType::DateTime,
        NativeType::Time,
        NativeType::TimeDelta,
        NativeType::None,
        NativeType::Bytes,
        NativeType::Str,
    ];

    /// Fully qualified Python name.
    pub const fn qualified_name(self) -> &'static str {
        match self {
            NativeType::Int => "int",
            NativeType::Float => "float",
            NativeType::Bool => "bool",
            NativeType::Decimal => "decimal.Decimal",
            NativeType::Date => "datetime.date",
            NativeType::DateTime => "datetime.datetime",
            NativeType::Time => "datetime.time",
            NativeType::TimeDelta => "datetime.timedelta",
            NativeType::None => "None",
            NativeType::Bytes => "bytes",
            NativeType::Str => "str",
        }
    }

    /// Name as written in an annotation after `from module import name`.
    pub fn short_name(self) -> &'static str {
        let qualified = self.qualified_name();
        qualified.rsplit('.').next().unwrap_or(qualified)
    }

    /// Default PostgreSQL type.
    pub fn column_type(self) -> ColumnType {
        match self {
            NativeType::Int => ColumnType::Integer,
            NativeType::Float => ColumnType::Float,
            NativeType::Bool => ColumnType::Boolean,
            NativeType::Decimal => ColumnType::NUMERIC,
            NativeType::Date => ColumnType::Date,
            NativeType::DateTime => ColumnType::DateTime { timezone: false },
            NativeType::Time => ColumnType::Time { timezone: false },
            NativeType::TimeDelta => ColumnType::Interval,
            NativeType::None => ColumnType::Null,
            NativeType::Bytes => ColumnType::LargeBinary,
            NativeType::Str => ColumnType::VARCHAR,
        }
    }

    /// `None` and `NoneType` both spell the absent-value marker.
    pub fn is_none_marker(annotation: &str) -> bool {
        matches!(annotation.trim(), "None" | "NoneType" | "types.NoneType")
    }
}
