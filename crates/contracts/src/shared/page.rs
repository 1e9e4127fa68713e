use serde::{Deserialize, Serialize};

/// Страница результатов в формате Spring Data `Page<T>`
///
/// `number` приходит 0-based, на UI страницы нумеруются с 1.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub number: u32,
}

impl<T> Page<T> {
    /// Номер страницы для отображения (1-based)
    pub fn ui_page(&self) -> usize {
        self.number as usize + 1
    }
}

/// Количество страниц для `item_count` записей, минимум одна
pub fn page_count(item_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    item_count.div_ceil(page_size).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_spring_page_envelope() {
        let raw = r#"{
            "content": [1, 2, 3],
            "totalElements": 25,
            "totalPages": 3,
            "size": 10,
            "number": 2,
            "first": false,
            "last": true
        }"#;
        let page: Page<u32> = serde_json::from_str(raw).unwrap();
        assert_eq!(page.content, vec![1, 2, 3]);
        assert_eq!(page.total_elements, 25);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.size, 10);
        assert_eq!(page.ui_page(), 3);
    }

    #[test]
    fn missing_counters_default_to_zero() {
        let page: Page<u32> = serde_json::from_str(r#"{"content": []}"#).unwrap();
        assert_eq!(page.total_elements, 0);
        assert_eq!(page.ui_page(), 1);
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(25, 10), 3);
        assert_eq!(page_count(20, 10), 2);
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(1, 50), 1);
        assert_eq!(page_count(7, 0), 1);
    }
}
