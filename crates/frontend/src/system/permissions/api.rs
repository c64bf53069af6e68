use contracts::system::permissions::PermissionCodes;

use crate::shared::api_utils::get_json;

/// Permission codes of `user_id`, optionally scoped to a tenant database.
pub async fn find_permissions(user_id: i64, tenant: Option<&str>) -> Result<PermissionCodes, String> {
    let path = format!("/api/usuarios/{}/permissoes", user_id);
    let query: Vec<(&str, String)> = tenant
        .map(|name| vec![("dbNome", name.to_string())])
        .unwrap_or_default();
    get_json(&path, &query).await
}
