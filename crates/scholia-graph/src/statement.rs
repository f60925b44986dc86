//! A pattern-match statement plus its bound parameters.

use serde_json::Value;

/// One declarative graph query, ready for execution.
///
/// Parameters are kept in bind order. Values use `serde_json::Value` so the
/// statement stays independent of any particular driver; the store
/// implementation converts them on submission.
#[derive(Debug, Clone, PartialEq)]
pub struct CypherStatement {
    text: String,
    params: Vec<(String, Value)>,
}

impl CypherStatement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            params: Vec::new(),
        }
    }

    /// Bind a parameter. Builder-style, mirroring the driver's `query(..).param(..)`.
    pub fn param(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.push((key.to_string(), value.into()));
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn params(&self) -> &[(String, Value)] {
        &self.params
    }

    /// Look up a bound parameter by key.
    pub fn param_value(&self, key: &str) -> Option<&Value> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binds_params_in_order() {
        let stmt = CypherStatement::new("MATCH (n) WHERE n.name = $name RETURN n")
            .param("name", "陈钢")
            .param("limit", 1);

        assert_eq!(stmt.params().len(), 2);
        assert_eq!(stmt.param_value("name"), Some(&Value::from("陈钢")));
        assert_eq!(stmt.param_value("limit"), Some(&Value::from(1)));
        assert_eq!(stmt.param_value("missing"), None);
    }
}
