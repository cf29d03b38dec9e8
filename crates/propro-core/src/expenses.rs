use serde::{Deserialize, Serialize};

/// Whether a ledger entry adds to or subtracts from the balance.
/// Serialized as `type` on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Income,
    #[default]
    Expense,
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl std::str::FromStr for EntryType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!("unknown entry type: {other}")),
        }
    }
}

/// A ledger entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i64,
    pub description: String,
    pub amount: f64,
    pub category: String,
    /// Entry date as `YYYY-MM-DD`.
    pub date: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
}

/// Client-settable expense fields, for create and full-replace update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpensePayload {
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_type_on_wire_is_type() {
        let expense = Expense {
            id: 1,
            description: "coffee".into(),
            amount: 4.5,
            category: "food".into(),
            date: "2026-08-29".into(),
            entry_type: EntryType::Expense,
        };
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["type"], "expense");
        assert!(json.get("entryType").is_none());
    }

    #[test]
    fn income_roundtrip() {
        let payload: ExpensePayload = serde_json::from_str(
            r#"{"description":"salary","amount":2500.0,"category":"work","date":"2026-08-01","type":"income"}"#,
        )
        .unwrap();
        assert_eq!(payload.entry_type, EntryType::Income);
        assert_eq!(payload.amount, 2500.0);
    }

    #[test]
    fn entry_type_parse() {
        assert_eq!("income".parse::<EntryType>().unwrap(), EntryType::Income);
        assert!("transfer".parse::<EntryType>().is_err());
    }
}
