use thiserror::Error;

/// Sort key selected by the request's `orderField` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Id,
    Age,
    Name,
}

impl OrderField {
    /// Parses the wire value. Empty string defaults to `Name`; any other
    /// unrecognized value is a bad-request error carrying the offending
    /// field name.
    pub fn parse(value: &str) -> Result<Self, QueryError> {
        match value {
            "Id" => Ok(Self::Id),
            "Age" => Ok(Self::Age),
            "Name" | "" => Ok(Self::Name),
            other => Err(QueryError::BadOrderField(other.to_string())),
        }
    }
}

pub const ORDER_BY_DESC: i32 = -1;
pub const ORDER_BY_AS_IS: i32 = 0;
pub const ORDER_BY_ASC: i32 = 1;

/// Sort direction selected by the request's `orderBy` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Desc,
    AsIs,
    Asc,
}

impl SortOrder {
    pub fn from_value(value: i32) -> Result<Self, QueryError> {
        match value {
            ORDER_BY_DESC => Ok(Self::Desc),
            ORDER_BY_AS_IS => Ok(Self::AsIs),
            ORDER_BY_ASC => Ok(Self::Asc),
            other => Err(QueryError::BadOrderBy(other)),
        }
    }
}

/// Structured rejection of a malformed ordering request. These must never
/// escape the server handler as a panic; they map to 400 responses.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("unknown order field {0:?}")]
    BadOrderField(String),
    #[error("bad orderBy value {0}")]
    BadOrderBy(i32),
}
