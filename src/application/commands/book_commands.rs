//! Book Commands

use crate::domain::book::BookId;

/// 创建书籍命令
#[derive(Debug, Clone)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub genre: String,
}

/// 删除书籍命令（级联删除书评）
#[derive(Debug, Clone)]
pub struct DeleteBook {
    pub book_id: BookId,
}
