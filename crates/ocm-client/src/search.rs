//! Helpers for the SQL-like `search` parameter of list requests.

/// Quotes a literal, doubling embedded single quotes.
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Builds `field1 = 'value1' OR field2 = 'value2'` from the given pairs.
pub fn any_of<'a, I>(conditions: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    conditions
        .into_iter()
        .map(|(field, value)| format!("{field} = {}", quote(value)))
        .collect::<Vec<_>>()
        .join(" OR ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote() {
        assert_eq!(quote("my-cluster"), "'my-cluster'");
        assert_eq!(quote("it's"), "'it''s'");
        assert_eq!(quote(""), "''");
    }

    #[test]
    fn test_any_of() {
        assert_eq!(
            any_of([("id", "abc"), ("name", "o'neil")]),
            "id = 'abc' OR name = 'o''neil'"
        );
        assert_eq!(any_of([]), "");
    }
}
