//! 产品数据模型

use serde::{Deserialize, Serialize};

/// products 表的一行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// 创建产品请求，三个字段都必填，除类型检查外不做校验
#[derive(Debug, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// 更新产品请求，任意字段可缺省
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

/// 更新请求里真正生效的字段集合
#[derive(Debug, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

impl UpdateProduct {
    /// 过滤出实际要写库的字段。
    ///
    /// 兼容旧服务的行为：空字符串和 0 与缺省同样按"未提供"处理，
    /// 静默忽略。疑似上游遗留缺陷，但对外行为必须保持一致，
    /// 未经确认不能修掉（见 DESIGN.md）。
    pub fn into_changes(self) -> ProductChanges {
        ProductChanges {
            name: self.name.filter(|n| !n.is_empty()),
            description: self.description.filter(|d| !d.is_empty()),
            price: self.price.filter(|p| *p != 0.0),
        }
    }
}

impl ProductChanges {
    /// 所有字段都被忽略时为空
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.price.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_serializes_with_id() {
        let product = Product {
            id: 1,
            name: "A".to_string(),
            description: "d".to_string(),
            price: 1.5,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 1, "name": "A", "description": "d", "price": 1.5 })
        );
    }

    #[test]
    fn update_payload_accepts_any_subset() {
        let payload: UpdateProduct = serde_json::from_str(r#"{ "price": 2.5 }"#).unwrap();
        assert_eq!(payload.name, None);
        assert_eq!(payload.description, None);
        assert_eq!(payload.price, Some(2.5));

        let payload: UpdateProduct = serde_json::from_str("{}").unwrap();
        assert!(payload.into_changes().is_empty());
    }

    #[test]
    fn changes_keep_provided_fields() {
        let payload = UpdateProduct {
            name: Some("B".to_string()),
            description: None,
            price: Some(2.5),
        };

        let changes = payload.into_changes();
        assert_eq!(changes.name, Some("B".to_string()));
        assert_eq!(changes.description, None);
        assert_eq!(changes.price, Some(2.5));
        assert!(!changes.is_empty());
    }

    #[test]
    fn changes_drop_empty_string() {
        let payload = UpdateProduct {
            name: Some(String::new()),
            description: Some(String::new()),
            price: None,
        };

        assert!(payload.into_changes().is_empty());
    }

    // 回归保护：price 传 0 等同于没传，不能写库
    #[test]
    fn changes_drop_zero_price() {
        let payload = UpdateProduct {
            name: None,
            description: None,
            price: Some(0.0),
        };
        assert!(payload.into_changes().is_empty());

        let payload: UpdateProduct = serde_json::from_str(r#"{ "price": 0 }"#).unwrap();
        assert!(payload.into_changes().is_empty());
    }
}
