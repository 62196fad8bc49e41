//! SeaORM entity for the `users` table, plus domain mapping.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::User;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub hashed_password: Option<String>,
    pub role: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Row -> domain entity. Rows are trusted; validation happened on the way in.
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User::from_persistence(
            model.id,
            model.email,
            model.hashed_password,
            &model.role,
            model.created_at,
            model.updated_at,
        )
    }
}

// Domain entity -> insertable row. Lossless on every persisted field.
impl From<&User> for ActiveModel {
    fn from(user: &User) -> Self {
        ActiveModel {
            id: Set(user.id()),
            email: Set(user.email().as_str().to_string()),
            hashed_password: Set(user.password().map(|p| p.as_str().to_string())),
            role: Set(user.role().to_string()),
            created_at: Set(user.created_at()),
            updated_at: Set(user.updated_at()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn model_maps_to_domain_losslessly() {
        let now = Utc::now();
        let model = Model {
            id: Uuid::new_v4(),
            email: "row@example.com".to_string(),
            hashed_password: Some("$argon2id$stored".to_string()),
            role: "admin".to_string(),
            created_at: now,
            updated_at: now,
        };

        let user = User::from(model.clone());

        assert_eq!(user.id(), model.id);
        assert_eq!(user.email().as_str(), model.email);
        assert_eq!(
            user.password().map(|p| p.as_str().to_string()),
            model.hashed_password
        );
        assert!(user.is_admin());
        assert_eq!(user.created_at(), model.created_at);
        assert_eq!(user.updated_at(), model.updated_at);
    }

    #[test]
    fn domain_maps_to_active_model_losslessly() {
        let user = User::create(
            Uuid::new_v4(),
            crate::domain::Email::new("new@example.com").unwrap(),
            "password123",
        )
        .unwrap();

        let active = ActiveModel::from(&user);

        assert_eq!(active.id.as_ref(), &user.id());
        assert_eq!(active.email.as_ref(), "new@example.com");
        assert_eq!(active.role.as_ref(), "user");
        assert_eq!(
            active.hashed_password.as_ref().as_deref(),
            user.password().map(|p| p.as_str())
        );
    }
}
