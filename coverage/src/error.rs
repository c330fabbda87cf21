use thiserror::Error;

/// ошибки разбора каталога и построения отчётов
#[derive(Error, Debug)]
pub enum CoverageError
{
    /// документ каталога не соответствует ожидаемой структуре
    #[error("invalid catalog format: {0}")]
    CatalogFormat(#[from] serde_json::Error),

    /// в каталоге нет записей с такой категорией
    #[error(transparent)]
    CategoryNotFound(#[from] UnknownCategory),
}

/// запрошенной категории нет в каталоге
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("category '{category}' not found. available categories: {}", .known.join(", "))]
pub struct UnknownCategory
{
    pub category: String,
    /// категории каталога, в алфавитном порядке
    pub known: Vec<String>,
}

impl UnknownCategory
{
    pub fn new(category: impl Into<String>, known: Vec<String>) -> Self
    {
        Self {
            category: category.into(),
            known,
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn unknown_category_message()
    {
        let error = CoverageError::from(UnknownCategory::new("weather", vec!["arrow".to_owned(), "star".to_owned()]));

        assert_eq!(
            error.to_string(),
            "category 'weather' not found. available categories: arrow, star"
        );
    }
}
