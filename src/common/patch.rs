// src/common/patch.rs

use serde::{Deserialize, Deserializer};

/// Deserializador para campos anuláveis de um PATCH, distinguindo campo
/// ausente de `null` explícito. Usar junto com `#[serde(default)]`:
/// ausente fica `None`, `null` vira `Some(None)` (limpa a coluna) e um
/// valor vira `Some(Some(v))`.
pub fn campo_presente<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "campo_presente")]
        apelido: Option<Option<String>>,
    }

    #[test]
    fn ausente_nulo_e_valor_sao_tres_casos_distintos() {
        let ausente: Payload = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(ausente.apelido, None);

        let nulo: Payload = serde_json::from_value(serde_json::json!({ "apelido": null })).unwrap();
        assert_eq!(nulo.apelido, Some(None));

        let valor: Payload =
            serde_json::from_value(serde_json::json!({ "apelido": "Zé" })).unwrap();
        assert_eq!(valor.apelido, Some(Some("Zé".to_string())));
    }
}
