use serde::{Deserialize, Serialize};

use crate::codepoint::{resolve, resolve_sequence, UNRESOLVED};
use crate::error::CoverageError;

/// категория записи, если она не указана
pub const UNKNOWN_CATEGORY: &str = "unknown";

/// запись каталога символов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord
{
    /// сам символ или последовательность символов
    #[serde(rename = "char")]
    pub character: String,
    /// кодпоинт(ы) в виде "U+2605" или "U+1F1F0 U+1F1F7"
    #[serde(default)]
    pub codepoint: String,
    /// смысловая категория каталога
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subcategory: Option<String>,
    /// официальное название символа
    #[serde(default)]
    pub name: Option<String>,
    /// блок Unicode, указанный в каталоге
    #[serde(default)]
    pub block: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub tags_ko: Vec<String>,
    #[serde(default)]
    pub tags_en: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<i64>,
}

impl CharacterRecord
{
    /// запись с минимальным набором полей
    pub fn new(character: impl Into<String>, codepoint: impl Into<String>, category: Option<&str>) -> Self
    {
        Self {
            character: character.into(),
            codepoint: codepoint.into(),
            category: category.map(str::to_owned),
            subcategory: None,
            name: None,
            block: None,
            tags: vec![],
            tags_ko: vec![],
            tags_en: vec![],
            frequency: None,
        }
    }

    /// категория записи; пустая или отсутствующая - "unknown"
    pub fn category(&self) -> &str
    {
        match self.category.as_deref() {
            Some(category) if !category.is_empty() => category,
            _ => UNKNOWN_CATEGORY,
        }
    }

    /// название символа, пустая строка при отсутствии
    pub fn name(&self) -> &str
    {
        self.name.as_deref().unwrap_or_default()
    }

    /// теги для отображения: сначала корейские, затем общие, затем английские
    pub fn display_tags(&self, limit: usize) -> Vec<&str>
    {
        [&self.tags_ko, &self.tags, &self.tags_en]
            .into_iter()
            .find(|tags| !tags.is_empty())
            .map(|tags| tags.iter().take(limit).map(String::as_str).collect())
            .unwrap_or_default()
    }
}

/// запись каталога с разобранным основным кодпоинтом
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCharacter
{
    pub record: CharacterRecord,
    /// первый кодпоинт поля codepoint, 0 - если разобрать не удалось
    pub code: u32,
}

impl ResolvedCharacter
{
    pub fn new(record: CharacterRecord) -> Self
    {
        let code = resolve(&record.codepoint);

        Self { record, code }
    }

    /// участвует-ли запись в подсчётах по диапазонам
    #[inline]
    pub fn is_resolved(&self) -> bool
    {
        self.code != UNRESOLVED
    }

    #[inline]
    pub fn category(&self) -> &str
    {
        self.record.category()
    }

    /// полная последовательность кодпоинтов записи
    pub fn sequence(&self) -> Vec<u32>
    {
        resolve_sequence(&self.record.codepoint)
    }
}

impl From<CharacterRecord> for ResolvedCharacter
{
    fn from(record: CharacterRecord) -> Self
    {
        Self::new(record)
    }
}

/// метаданные категории из файла каталога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryInfo
{
    pub id: String,
    #[serde(default)]
    pub name_ko: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub order: Option<i64>,
}

/// файл каталога: либо массив записей, либо объект с ключом characters
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument
{
    Bare(Vec<CharacterRecord>),
    Wrapped
    {
        #[serde(default)]
        version: Option<String>,
        #[serde(default, rename = "lastUpdated")]
        last_updated: Option<String>,
        characters: Vec<CharacterRecord>,
        #[serde(default)]
        categories: Vec<CategoryInfo>,
    },
}

/// загруженный каталог символов
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog
{
    pub version: Option<String>,
    pub last_updated: Option<String>,
    pub characters: Vec<CharacterRecord>,
    pub categories: Vec<CategoryInfo>,
}

impl Catalog
{
    /// разбор JSON-документа каталога
    pub fn from_json(source: &str) -> Result<Self, CoverageError>
    {
        let document: CatalogDocument = serde_json::from_str(source)?;

        Ok(match document {
            CatalogDocument::Bare(characters) => Self {
                characters,
                ..Self::default()
            },
            CatalogDocument::Wrapped {
                version,
                last_updated,
                characters,
                categories,
            } => Self {
                version,
                last_updated,
                characters,
                categories,
            },
        })
    }

    /// разобрать кодпоинты всех записей, один раз
    pub fn resolve(&self) -> Vec<ResolvedCharacter>
    {
        self.characters.iter().cloned().map(ResolvedCharacter::new).collect()
    }

    pub fn len(&self) -> usize
    {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.characters.is_empty()
    }
}

impl From<Vec<CharacterRecord>> for Catalog
{
    fn from(characters: Vec<CharacterRecord>) -> Self
    {
        Self {
            characters,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn bare_list()
    {
        let catalog = Catalog::from_json(r#"[{"char":"→","codepoint":"U+2192","category":"arrow"}]"#).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.characters[0].character, "→");
        assert_eq!(catalog.characters[0].category(), "arrow");
        assert_eq!(catalog.version, None);
    }

    #[test]
    fn wrapped_object()
    {
        let catalog = Catalog::from_json(
            r#"{
                "version": "1.2",
                "lastUpdated": "2024-12-01",
                "characters": [
                    {"char": "★", "codepoint": "U+2605", "name": "BLACK STAR", "tags_ko": ["별", "검은별", "별표"], "frequency": 90}
                ],
                "categories": [{"id": "star", "name_ko": "별", "name_en": "Stars", "icon": "⭐", "order": 1}]
            }"#,
        )
        .unwrap();

        assert_eq!(catalog.version.as_deref(), Some("1.2"));
        assert_eq!(catalog.last_updated.as_deref(), Some("2024-12-01"));
        assert_eq!(catalog.categories[0].id, "star");

        let record = &catalog.characters[0];
        assert_eq!(record.category(), UNKNOWN_CATEGORY);
        assert_eq!(record.name(), "BLACK STAR");
        assert_eq!(record.display_tags(2), vec!["별", "검은별"]);
        assert_eq!(record.frequency, Some(90));
    }

    #[test]
    fn missing_fields_default()
    {
        let catalog = Catalog::from_json(r#"[{"char":"x"}, {"char":"y","category":""}]"#).unwrap();

        for record in &catalog.characters {
            assert_eq!(record.category(), UNKNOWN_CATEGORY);
            assert_eq!(record.name(), "");
            assert!(record.display_tags(2).is_empty());
        }

        let resolved = catalog.resolve();
        assert!(resolved.iter().all(|c| !c.is_resolved()));
    }

    #[test]
    fn tag_fallback()
    {
        let mut record = CharacterRecord::new("♥", "U+2665", Some("heart"));
        record.tags_en = vec!["heart".to_owned()];
        assert_eq!(record.display_tags(2), vec!["heart"]);

        record.tags = vec!["love".to_owned(), "suit".to_owned(), "card".to_owned()];
        assert_eq!(record.display_tags(2), vec!["love", "suit"]);
    }

    #[test]
    fn malformed_document()
    {
        assert!(matches!(Catalog::from_json("{}"), Err(CoverageError::CatalogFormat(_))));
        assert!(matches!(Catalog::from_json("not json"), Err(CoverageError::CatalogFormat(_))));
        assert!(matches!(Catalog::from_json(r#"[{"codepoint":"U+0041"}]"#), Err(CoverageError::CatalogFormat(_))));
    }

    #[test]
    fn resolved_sequence()
    {
        let flag = ResolvedCharacter::new(CharacterRecord::new("🇰🇷", "U+1F1F0 U+1F1F7", Some("flag")));

        assert_eq!(flag.code, 0x1F1F0);
        assert_eq!(flag.sequence(), vec![0x1F1F0, 0x1F1F7]);
        assert!(flag.is_resolved());
    }
}
