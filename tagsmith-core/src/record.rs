/// One identifier to be emitted as a typed constant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentifierRecord {
    /// Namespace the constant is grouped under (e.g. the screen it belongs to).
    pub parent: String,
    /// Human-authored logical name, sanitized into the constant's name.
    pub identifier: String,
    /// Literal value carried by the generated constant.
    pub raw_value: String,
}

impl IdentifierRecord {
    pub fn new(
        parent: impl Into<String>,
        identifier: impl Into<String>,
        raw_value: impl Into<String>,
    ) -> Self {
        Self {
            parent: parent.into(),
            identifier: identifier.into(),
            raw_value: raw_value.into(),
        }
    }
}

impl<P, I, R> From<(P, I, R)> for IdentifierRecord
where
    P: Into<String>,
    I: Into<String>,
    R: Into<String>,
{
    fn from((parent, identifier, raw_value): (P, I, R)) -> Self {
        Self::new(parent, identifier, raw_value)
    }
}
