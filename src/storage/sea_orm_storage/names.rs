//! 按 id 批量加载名称，用于列表视图

use std::collections::HashMap;

use super::{SeaOrmStorage, db_error};
use crate::entity::school_classes::{Column as ClassColumn, Entity as SchoolClasses};
use crate::entity::subjects::{Column as SubjectColumn, Entity as Subjects};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::Result;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QuerySelect};

fn dedup(ids: impl IntoIterator<Item = i64>) -> Vec<i64> {
    let mut ids: Vec<i64> = ids.into_iter().collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

impl SeaOrmStorage {
    pub(crate) async fn user_names(
        &self,
        ids: impl IntoIterator<Item = i64>,
    ) -> Result<HashMap<i64, String>> {
        let ids = dedup(ids);
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows: Vec<(i64, String)> = Users::find()
            .select_only()
            .column(UserColumn::Id)
            .column(UserColumn::FullName)
            .filter(UserColumn::Id.is_in(ids))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_error("查询用户名称失败"))?;
        Ok(rows.into_iter().collect())
    }

    pub(crate) async fn class_names(
        &self,
        ids: impl IntoIterator<Item = i64>,
    ) -> Result<HashMap<i64, String>> {
        let ids = dedup(ids);
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows: Vec<(i64, String)> = SchoolClasses::find()
            .select_only()
            .column(ClassColumn::Id)
            .column(ClassColumn::Name)
            .filter(ClassColumn::Id.is_in(ids))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_error("查询班级名称失败"))?;
        Ok(rows.into_iter().collect())
    }

    pub(crate) async fn subject_names(
        &self,
        ids: impl IntoIterator<Item = i64>,
    ) -> Result<HashMap<i64, String>> {
        let ids = dedup(ids);
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows: Vec<(i64, String)> = Subjects::find()
            .select_only()
            .column(SubjectColumn::Id)
            .column(SubjectColumn::Name)
            .filter(SubjectColumn::Id.is_in(ids))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_error("查询科目名称失败"))?;
        Ok(rows.into_iter().collect())
    }
}

/// 取名称，缺失时为空串
pub(crate) fn name_of(names: &HashMap<i64, String>, id: i64) -> String {
    names.get(&id).cloned().unwrap_or_default()
}
