//! Date handling for the backend's array-encoded timestamps.
//!
//! Document dates come over the wire as `[año, mes, día, hora, min, seg]`
//! with months 1-based.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Decode an array-encoded timestamp. Short arrays and out-of-range
/// components yield `None`.
pub fn desde_arreglo(arreglo: &[u32]) -> Option<NaiveDateTime> {
    match *arreglo {
        [anio, mes, dia, hora, minuto, segundo, ..] => {
            NaiveDate::from_ymd_opt(anio as i32, mes, dia)?.and_hms_opt(hora, minuto, segundo)
        }
        _ => None,
    }
}

/// Serde adapter for response fields carrying array-encoded dates.
pub fn deserializar<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let arreglo = Vec::<u32>::deserialize(deserializer)?;
    desde_arreglo(&arreglo)
        .ok_or_else(|| serde::de::Error::custom("invalid date array, expected [y,m,d,h,min,s]"))
}

/// Display format used by the history tables: `DD/MM/YYYY HH:mm`.
pub fn formatear(fecha: &NaiveDateTime) -> String {
    fecha.format("%d/%m/%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodifica_y_formatea_un_arreglo_valido() {
        let fecha = desde_arreglo(&[2025, 11, 7, 22, 28, 54]).unwrap();
        assert_eq!(formatear(&fecha), "07/11/2025 22:28");
    }

    #[test]
    fn rechaza_arreglos_cortos_o_invalidos() {
        assert!(desde_arreglo(&[2025, 11, 7]).is_none());
        assert!(desde_arreglo(&[2025, 13, 7, 0, 0, 0]).is_none());
        assert!(desde_arreglo(&[]).is_none());
    }

    #[test]
    fn ignora_componentes_extra() {
        assert!(desde_arreglo(&[2025, 1, 2, 3, 4, 5, 999]).is_some());
    }
}
