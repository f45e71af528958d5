//! Book Context - Value Objects

use super::BookError;

/// 书籍标识（由存储层在创建时分配）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookId(i64);

impl BookId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<BookId> for i64 {
    fn from(id: BookId) -> Self {
        id.0
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 书评标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReviewId(i64);

impl ReviewId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ReviewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 非空白、限长的文本字段校验
///
/// 长度按字符数计算，不按字节
fn bounded_text(field: &'static str, value: String, max: usize) -> Result<String, BookError> {
    if value.trim().is_empty() {
        return Err(BookError::Blank { field });
    }
    if value.chars().count() > max {
        return Err(BookError::TooLong { field, max });
    }
    Ok(value)
}

/// 书名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    pub const MAX_CHARS: usize = 100;

    pub fn new(title: impl Into<String>) -> Result<Self, BookError> {
        bounded_text("title", title.into(), Self::MAX_CHARS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 作者
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author(String);

impl Author {
    pub const MAX_CHARS: usize = 100;

    pub fn new(author: impl Into<String>) -> Result<Self, BookError> {
        bounded_text("author", author.into(), Self::MAX_CHARS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 类型（流派）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre(String);

impl Genre {
    pub const MAX_CHARS: usize = 50;

    pub fn new(genre: impl Into<String>) -> Result<Self, BookError> {
        bounded_text("genre", genre.into(), Self::MAX_CHARS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 评论者名称
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewerName(String);

impl ReviewerName {
    pub const MAX_CHARS: usize = 100;

    pub fn new(name: impl Into<String>) -> Result<Self, BookError> {
        bounded_text("reviewer", name.into(), Self::MAX_CHARS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 评论内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment(String);

impl Comment {
    pub const MAX_CHARS: usize = 1000;

    pub fn new(comment: impl Into<String>) -> Result<Self, BookError> {
        bounded_text("comment", comment.into(), Self::MAX_CHARS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 评分 (1 - 5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 5;

    pub fn new(value: i64) -> Result<Self, BookError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(BookError::RatingOutOfRange(value));
        }
        // 已检查范围，转换不会截断
        Ok(Self(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}
