//! Book Query Model - 图书列表查询模型
//!
//! 查询组合器（ListBooksHandler）产出 `BookQuery`，存储层把它翻译成
//! 单条分页 SQL。谓词列表以 AND 组合；空列表即恒真谓词，
//! 过滤与不过滤走同一条查询路径。

/// 单个过滤谓词
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookPredicate {
    /// 书名包含子串（忽略大小写）
    TitleContains(String),
    /// 作者姓名包含子串（忽略大小写）
    AuthorNameContains(String),
    /// 属于指定作者
    AuthorIs(i64),
}

/// 谓词的合取
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    predicates: Vec<BookPredicate>,
}

impl BookFilter {
    /// 恒真过滤器
    pub fn all() -> Self {
        Self::default()
    }

    /// 追加一个谓词（AND）
    pub fn and(mut self, predicate: BookPredicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// 可选谓词：None 时保持不变
    pub fn and_maybe(self, predicate: Option<BookPredicate>) -> Self {
        match predicate {
            Some(predicate) => self.and(predicate),
            None => self,
        }
    }

    pub fn predicates(&self) -> &[BookPredicate] {
        &self.predicates
    }

    pub fn is_all(&self) -> bool {
        self.predicates.is_empty()
    }
}

/// 可排序字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookSortField {
    Id,
    Title,
    Price,
    Isbn,
    AuthorName,
}

impl BookSortField {
    /// 解析查询参数中的字段名（区分大小写）
    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "id" => Some(Self::Id),
            "title" => Some(Self::Title),
            "price" => Some(Self::Price),
            "isbn" => Some(Self::Isbn),
            "authorName" => Some(Self::AuthorName),
            _ => None,
        }
    }
}

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// 忽略大小写；无法识别的值一律视为升序
    pub fn from_param(s: &str) -> Self {
        if s.eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }
}

/// 排序规则
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookSort {
    pub field: BookSortField,
    pub direction: SortDirection,
}

impl Default for BookSort {
    fn default() -> Self {
        Self {
            field: BookSortField::Id,
            direction: SortDirection::Asc,
        }
    }
}

/// 分页窗口（page 从 0 开始）
///
/// 不变量: page >= 0, size > 0, page * size 不溢出 i64
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page: i64,
    size: i64,
}

impl PageWindow {
    /// 不满足不变量时返回 None
    pub fn new(page: i64, size: i64) -> Option<Self> {
        if page < 0 || size <= 0 {
            return None;
        }
        page.checked_mul(size)?;
        Some(Self { page, size })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn offset(&self) -> i64 {
        self.page * self.size
    }

    /// ceil(total_items / size)
    pub fn total_pages(&self, total_items: i64) -> i64 {
        if total_items <= 0 {
            return 0;
        }
        (total_items - 1) / self.size + 1
    }
}

/// 完整的图书列表查询
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookQuery {
    pub filter: BookFilter,
    pub sort: BookSort,
    pub window: PageWindow,
}

/// 存储层返回的一页结果
#[derive(Debug, Clone)]
pub struct BookPage {
    pub items: Vec<super::BookRecord>,
    pub total_items: i64,
}
