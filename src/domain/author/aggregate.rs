//! Author Context - Aggregate

use serde::{Deserialize, Serialize};

use super::{AuthorError, AuthorName, Email};

/// Author 聚合的可变状态
///
/// 标识由存储层分配，这里只包含客户端可以写入的字段。
/// 构造成功即意味着字段级不变量成立；邮箱唯一性需要查询存储，
/// 由应用层命令处理器负责。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorDetails {
    name: AuthorName,
    email: Email,
}

impl AuthorDetails {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self, AuthorError> {
        Ok(Self {
            name: AuthorName::new(name)?,
            email: Email::new(email)?,
        })
    }

    pub fn name(&self) -> &AuthorName {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_creation() {
        let details = AuthorDetails::new("Leo Tolstoy", "leo@example.com").unwrap();
        assert_eq!(details.name().as_str(), "Leo Tolstoy");
        assert_eq!(details.email().as_str(), "leo@example.com");
    }

    #[test]
    fn test_name_checked_before_email() {
        let err = AuthorDetails::new("", "").unwrap_err();
        assert_eq!(err.field(), "name");
    }
}
