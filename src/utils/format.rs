use chrono::{DateTime, NaiveDateTime};

/// Fecha corta para tablas (dd-mm-aaaa). Si el backend manda algo que no es
/// ISO-8601 se muestra tal cual.
pub fn format_date(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%d-%m-%Y").to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format("%d-%m-%Y").to_string();
    }
    raw.to_string()
}

/// Fecha y hora para el registro de actividad.
pub fn format_datetime(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%d-%m-%Y %H:%M").to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format("%d-%m-%Y %H:%M").to_string();
    }
    raw.to_string()
}

/// Precio con separador decimal local.
pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rfc3339_dates() {
        assert_eq!(format_date("2024-03-05T10:30:00Z"), "05-03-2024");
        assert_eq!(format_datetime("2024-03-05T10:30:00Z"), "05-03-2024 10:30");
    }

    #[test]
    fn formats_naive_dates() {
        assert_eq!(format_date("2024-03-05T10:30:00.123456"), "05-03-2024");
    }

    #[test]
    fn passes_through_unparseable_input() {
        assert_eq!(format_date("ayer"), "ayer");
    }

    #[test]
    fn formats_prices() {
        assert_eq!(format_price(1290.5), "$1290.50");
    }
}
