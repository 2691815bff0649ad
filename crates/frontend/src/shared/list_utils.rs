/// Утилиты для списков: сортировка, индикаторы, подсветка совпадений
use leptos::prelude::*;
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Сортирует список по указанному полю. Сортировка стабильная.
/// Пустое поле означает исходный порядок.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    if field.is_empty() {
        return;
    }
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending { cmp } else { cmp.reverse() }
    });
}

/// Case-insensitive comparison for text columns
pub fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Подсветка совпадений в тексте (case-insensitive).
/// Фильтр используется как есть, включая пробелы по краям.
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    if filter.trim().is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-highlight">{text[start..end].to_string()}</mark> }.into_any());
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Byte ranges of non-overlapping case-insensitive matches. Only ASCII
/// case folding is used so the offsets stay valid for the original text.
fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let text_lower = text.to_ascii_lowercase();
    let filter_lower = filter.to_ascii_lowercase();
    let mut ranges = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        ranges.push((start, end));
        last_pos = end;
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        rank: u32,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "rank" => self.rank.cmp(&other.rank),
                _ => cmp_text(self.name, other.name),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "beta", rank: 2 },
            Row { name: "Alpha", rank: 2 },
            Row { name: "gamma", rank: 1 },
        ]
    }

    #[test]
    fn test_sort_by_name_ignores_case() {
        let mut data = rows();
        sort_list(&mut data, "name", true);
        let names: Vec<_> = data.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Alpha", "beta", "gamma"]);

        sort_list(&mut data, "name", false);
        assert_eq!(data[0].name, "gamma");
    }

    #[test]
    fn test_sort_is_stable() {
        let mut data = rows();
        sort_list(&mut data, "rank", true);
        let names: Vec<_> = data.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["gamma", "beta", "Alpha"]);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "rank", true), " ⇅");
    }

    #[test]
    fn test_match_ranges() {
        assert_eq!(match_ranges("Priya Sharma", "sha"), vec![(6, 9)]);
        assert_eq!(match_ranges("aAa", "a"), vec![(0, 1), (1, 2), (2, 3)]);
        assert!(match_ranges("Alex", "zz").is_empty());
    }

    #[test]
    fn test_match_ranges_keep_padding() {
        assert!(match_ranges("Priya Sharma", "sharma ").is_empty());
        assert_eq!(match_ranges("Priya Sharma", "priya "), vec![(0, 6)]);
        assert_eq!(match_ranges("Priya Sharma", " sharma"), vec![(5, 12)]);
    }

    #[test]
    fn test_empty_field_keeps_input_order() {
        let mut data = rows();
        sort_list(&mut data, "", true);
        assert_eq!(data, rows());
        sort_list(&mut data, "", false);
        assert_eq!(data, rows());
    }
}
