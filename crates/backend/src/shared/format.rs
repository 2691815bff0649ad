/// Форматирует число с разделителями тысяч (точками)
///
/// # Примеры
/// ```
/// use backend::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1.234.567");
/// ```
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result
}

/// Response size for the request log: bytes below 10 KB, kilobytes above.
pub fn format_size(bytes: usize) -> String {
    if bytes < 10 * 1024 {
        format!("{} B", format_number(bytes))
    } else {
        format!("{} KB", format_number(bytes / 1024))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234567), "1.234.567");
        assert_eq!(format_number(1234567890), "1.234.567.890");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(10_239), "10.239 B");
        assert_eq!(format_size(2 * 1024 * 1024), "2.048 KB");
    }
}
