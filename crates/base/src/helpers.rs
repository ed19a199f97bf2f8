use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::entities::MONEY_DECIMAL_PLACES;

/// The remote service answers either with the bare payload or with the
/// payload wrapped as `{ "data": ... }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Bare(T),
    Wrapped { data: T },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListEnvelope<T> {
    Bare(Vec<T>),
    Wrapped { data: Option<Vec<T>> },
}

/// Decodes a detail response that may be bare or enveloped.
pub fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T> {
    let envelope: Envelope<T> = serde_json::from_str(body)
        .context(format!("error on decoding a response body: {}", body))?;

    Ok(match envelope {
        Envelope::Bare(item) => item,
        Envelope::Wrapped { data } => data,
    })
}

/// Decodes a list response: accepts either shape and normalizes to a sequence.
/// An object without a `data` array decodes to an empty list.
pub fn decode_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>> {
    let envelope: ListEnvelope<T> = serde_json::from_str(body)
        .context(format!("error on decoding a list response body: {}", body))?;

    Ok(match envelope {
        ListEnvelope::Bare(items) => items,
        ListEnvelope::Wrapped { data } => data.unwrap_or_default(),
    })
}

pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp(MONEY_DECIMAL_PLACES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Named {
        id: u64,
        name: String,
    }

    #[test]
    #[allow(non_snake_case)]
    fn decode_envelope__wrapped_object__should_unwrap_data() {
        let item: Named = decode_envelope(r#"{"data": {"id": 1, "name": "Oak"}}"#).unwrap();

        assert_eq!(
            item,
            Named {
                id: 1,
                name: String::from("Oak")
            }
        );
    }

    #[test]
    #[allow(non_snake_case)]
    fn decode_envelope__bare_object__should_return_it() {
        let item: Named = decode_envelope(r#"{"id": 2, "name": "Maple"}"#).unwrap();

        assert_eq!(item.id, 2);
    }

    #[test]
    #[allow(non_snake_case)]
    fn decode_list__object_without_data__should_return_empty_list() {
        let items: Vec<Named> = decode_list(r#"{"message": "ok"}"#).unwrap();

        assert!(items.is_empty());
    }

    #[test]
    #[allow(non_snake_case)]
    fn decode_list__null_data__should_return_empty_list() {
        let items: Vec<Named> = decode_list(r#"{"data": null}"#).unwrap();

        assert!(items.is_empty());
    }

    #[test]
    #[allow(non_snake_case)]
    fn decode_list__malformed_item__should_return_error() {
        assert!(decode_list::<Named>(r#"[{"id": "x"}]"#).is_err());
        assert!(decode_list::<Named>("not json").is_err());
    }

    #[test]
    fn should_round_money_to_cents() {
        assert_eq!(round_money(dec!(15.005)), dec!(15.00));
        assert_eq!(round_money(dec!(4.567)), dec!(4.57));
    }
}
