//! Author Context - Value Objects

use serde::{Deserialize, Serialize};

use super::AuthorError;

/// 作者姓名
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorName(String);

impl AuthorName {
    pub fn new(name: impl Into<String>) -> Result<Self, AuthorError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AuthorError::BlankName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AuthorName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 作者邮箱
///
/// 不变量:
/// - 非空白
/// - 恰好一个 `@`，两侧均非空，且不含空白字符
/// - 在所有作者中唯一（由应用层和存储层共同保证）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    pub fn new(email: impl Into<String>) -> Result<Self, AuthorError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(AuthorError::BlankEmail);
        }

        let well_formed = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.is_empty()
                    && !domain.contains('@')
                    && !email.chars().any(char::is_whitespace)
            }
            None => false,
        };
        if !well_formed {
            return Err(AuthorError::MalformedEmail(email));
        }

        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
