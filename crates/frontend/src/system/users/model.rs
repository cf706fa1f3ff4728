use contracts::enums::UserRole;
use contracts::system::users::UserDto;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Some(UserRole::Admin)
    }
}

pub fn map_user(dto: UserDto) -> User {
    User {
        id: dto.id,
        name: dto.name,
        email: dto.email,
        role: dto.role,
        active: dto.is_active,
        created_at: dto.created_at,
        updated_at: dto.updated_at,
    }
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        map_user(dto)
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        UserDto {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            is_active: user.active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_map_user() {
        let dto: UserDto = serde_json::from_value(json!({
            "id": "u1", "name": "Ana", "email": null, "role": "admin",
            "is_active": false, "created_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        let user = map_user(dto.clone());

        assert!(user.is_admin());
        assert!(!user.active);
        assert_eq!(user.email, None);
        assert_eq!(UserDto::from(user), dto);
    }

    #[test]
    fn test_unknown_and_absent_roles_round_trip() {
        let input = json!({ "id": "u2", "name": "Bo", "role": "auditor", "is_active": true });
        let dto: UserDto = serde_json::from_value(input.clone()).unwrap();

        let user = map_user(dto.clone());
        assert_eq!(user.role, Some(UserRole::Other("auditor".into())));
        assert!(!user.is_admin());
        let back = UserDto::from(user);
        assert_eq!(back, dto);
        assert_eq!(serde_json::to_value(&back).unwrap()["role"], json!("auditor"));

        let dto: UserDto =
            serde_json::from_value(json!({ "id": "u3", "name": "Cy", "is_active": true })).unwrap();
        let user = map_user(dto.clone());
        assert_eq!(user.role, None);
        let back = UserDto::from(user);
        assert_eq!(back, dto);
        assert!(serde_json::to_value(&back).unwrap().get("role").is_none());
    }
}
