//! Official group repository

use std::collections::HashMap;

use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{GroupMemberRecord, GroupRecord, OfficialGroup},
};

/// Repository for grade groups and their membership
pub struct GroupRepository;

impl GroupRepository {
    /// Official groups without members, group name descending
    pub async fn find_official(pool: &PgPool) -> AppResult<Vec<GroupRecord>> {
        let groups = sqlx::query_as::<_, GroupRecord>(
            r#"
            SELECT group_id, group_name
            FROM team_groups
            WHERE is_grade
            ORDER BY group_name DESC, group_id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(groups)
    }

    /// Official groups with their members.
    ///
    /// Only self-teams count towards membership. With `enabled_only`,
    /// disabled users are left out; groups that end up empty are omitted.
    pub async fn find_official_with_members(
        pool: &PgPool,
        enabled_only: bool,
    ) -> AppResult<Vec<OfficialGroup>> {
        let groups = Self::find_official(pool).await?;

        let members = sqlx::query_as::<_, GroupMemberRecord>(
            r#"
            SELECT tg.group_id, u.username, u.nickname, u.cf_rating, u.is_enable, u.is_admin
            FROM users u
            JOIN team_user_rel tu ON tu.username = u.username
            JOIN teams t ON t.team_id = tu.team_id AND t.is_self
            JOIN team_group_rel tgr ON tgr.team_id = t.team_id
            JOIN team_groups tg ON tg.group_id = tgr.group_id AND tg.is_grade
            WHERE (NOT $1 OR u.is_enable)
            ORDER BY tg.group_id, u.username
            "#,
        )
        .bind(enabled_only)
        .fetch_all(pool)
        .await?;

        let mut by_group: HashMap<i32, Vec<GroupMemberRecord>> = HashMap::new();
        for member in members {
            by_group.entry(member.group_id).or_default().push(member);
        }

        let groups = groups
            .into_iter()
            .filter_map(|group| {
                let users = by_group.remove(&group.group_id)?;
                Some(OfficialGroup {
                    group_id: group.group_id,
                    group_name: group.group_name,
                    users: users.into_iter().map(Into::into).collect(),
                })
            })
            .collect();

        Ok(groups)
    }
}
