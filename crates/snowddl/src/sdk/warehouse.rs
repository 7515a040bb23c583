//! `CREATE / ALTER / DROP WAREHOUSE`

use super::{Statement, all_unset, exactly_one};
use crate::directive::Directive;
use crate::error::{DdlError, DdlResult};
use crate::ident::{AccountObjectIdentifier, SchemaObjectIdentifier};
use crate::value::{Field, FieldValue};
use crate::Ddl;

sql_token_enum! {
    /// Warehouse compute size.
    pub enum WarehouseSize {
        XSmall => "XSMALL",
        Small => "SMALL",
        Medium => "MEDIUM",
        Large => "LARGE",
        XLarge => "XLARGE",
        XXLarge => "XXLARGE",
        XXXLarge => "XXXLARGE",
        X4Large => "X4LARGE",
        X5Large => "X5LARGE",
        X6Large => "X6LARGE",
    }
}

sql_token_enum! {
    /// Multi-cluster scaling policy.
    pub enum ScalingPolicy {
        Standard => "STANDARD",
        Economy => "ECONOMY",
    }
}

sql_token_enum! {
    /// Warehouse properties that `ALTER WAREHOUSE ... UNSET` can reset.
    pub enum WarehouseProperty {
        WarehouseSize => "WAREHOUSE_SIZE",
        MaxClusterCount => "MAX_CLUSTER_COUNT",
        MinClusterCount => "MIN_CLUSTER_COUNT",
        ScalingPolicy => "SCALING_POLICY",
        AutoSuspend => "AUTO_SUSPEND",
        AutoResume => "AUTO_RESUME",
        ResourceMonitor => "RESOURCE_MONITOR",
        Comment => "COMMENT",
        EnableQueryAcceleration => "ENABLE_QUERY_ACCELERATION",
        QueryAccelerationMaxScaleFactor => "QUERY_ACCELERATION_MAX_SCALE_FACTOR",
        StatementTimeoutInSeconds => "STATEMENT_TIMEOUT_IN_SECONDS",
        StatementQueuedTimeoutInSeconds => "STATEMENT_QUEUED_TIMEOUT_IN_SECONDS",
        MaxConcurrencyLevel => "MAX_CONCURRENCY_LEVEL",
    }
}

// Each property is one element of the UNSET list.
impl crate::value::Ddl for WarehouseProperty {
    fn ddl_fields(&self) -> Vec<Field<'_>> {
        vec![Field::new(
            "property",
            Directive::keyword(),
            FieldValue::Str(self.as_str()),
        )]
    }
}

/// `<tag> = '<value>'`
#[derive(Debug, Clone, Ddl)]
pub struct TagAssociation {
    #[ddl(identifier)]
    pub name: SchemaObjectIdentifier,
    #[ddl(static, name = "=")]
    eq: (),
    #[ddl(keyword, single_quotes)]
    pub value: String,
}

impl TagAssociation {
    pub fn new(name: SchemaObjectIdentifier, value: impl Into<String>) -> Self {
        Self {
            name,
            eq: (),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Ddl)]
pub struct CreateWarehouseOptions {
    #[ddl(static, name = "CREATE")]
    create: (),
    #[ddl(keyword, name = "OR REPLACE")]
    pub or_replace: Option<bool>,
    #[ddl(static, name = "WAREHOUSE")]
    warehouse: (),
    #[ddl(keyword, name = "IF NOT EXISTS")]
    pub if_not_exists: Option<bool>,
    #[ddl(identifier)]
    pub name: AccountObjectIdentifier,

    #[ddl(parameter, name = "WAREHOUSE_SIZE")]
    pub warehouse_size: Option<WarehouseSize>,
    #[ddl(parameter, name = "MAX_CLUSTER_COUNT")]
    pub max_cluster_count: Option<u32>,
    #[ddl(parameter, name = "MIN_CLUSTER_COUNT")]
    pub min_cluster_count: Option<u32>,
    #[ddl(parameter, name = "SCALING_POLICY")]
    pub scaling_policy: Option<ScalingPolicy>,
    #[ddl(parameter, name = "AUTO_SUSPEND")]
    pub auto_suspend: Option<u32>,
    #[ddl(parameter, name = "AUTO_RESUME")]
    pub auto_resume: Option<bool>,
    #[ddl(parameter, name = "INITIALLY_SUSPENDED")]
    pub initially_suspended: Option<bool>,
    #[ddl(parameter, name = "RESOURCE_MONITOR")]
    pub resource_monitor: Option<AccountObjectIdentifier>,
    #[ddl(parameter, single_quotes, name = "COMMENT")]
    pub comment: Option<String>,
    #[ddl(parameter, name = "ENABLE_QUERY_ACCELERATION")]
    pub enable_query_acceleration: Option<bool>,
    #[ddl(parameter, name = "QUERY_ACCELERATION_MAX_SCALE_FACTOR")]
    pub query_acceleration_max_scale_factor: Option<u32>,
    #[ddl(parameter, name = "STATEMENT_TIMEOUT_IN_SECONDS")]
    pub statement_timeout_in_seconds: Option<u32>,
    #[ddl(parameter, name = "STATEMENT_QUEUED_TIMEOUT_IN_SECONDS")]
    pub statement_queued_timeout_in_seconds: Option<u32>,
    #[ddl(parameter, name = "MAX_CONCURRENCY_LEVEL")]
    pub max_concurrency_level: Option<u32>,

    #[ddl(list, name = "TAG")]
    pub tag: Option<Vec<TagAssociation>>,
}

impl CreateWarehouseOptions {
    pub fn new(name: AccountObjectIdentifier) -> Self {
        Self {
            create: (),
            or_replace: None,
            warehouse: (),
            if_not_exists: None,
            name,
            warehouse_size: None,
            max_cluster_count: None,
            min_cluster_count: None,
            scaling_policy: None,
            auto_suspend: None,
            auto_resume: None,
            initially_suspended: None,
            resource_monitor: None,
            comment: None,
            enable_query_acceleration: None,
            query_acceleration_max_scale_factor: None,
            statement_timeout_in_seconds: None,
            statement_queued_timeout_in_seconds: None,
            max_concurrency_level: None,
            tag: None,
        }
    }
}

fn check_cluster_counts(min: Option<u32>, max: Option<u32>) -> DdlResult<()> {
    match (min, max) {
        (Some(min), Some(max)) if min > max => Err(DdlError::validation(format!(
            "MIN_CLUSTER_COUNT ({min}) must not exceed MAX_CLUSTER_COUNT ({max})"
        ))),
        _ => Ok(()),
    }
}

impl Statement for CreateWarehouseOptions {
    fn validate(&self) -> DdlResult<()> {
        if self.or_replace == Some(true) && self.if_not_exists == Some(true) {
            return Err(DdlError::validation(
                "CREATE WAREHOUSE: OR REPLACE and IF NOT EXISTS are mutually exclusive",
            ));
        }
        check_cluster_counts(self.min_cluster_count, self.max_cluster_count)
    }
}

/// Properties for `ALTER WAREHOUSE ... SET`.
#[derive(Debug, Clone, Default, Ddl)]
pub struct WarehouseSet {
    #[ddl(parameter, name = "WAREHOUSE_SIZE")]
    pub warehouse_size: Option<WarehouseSize>,
    #[ddl(parameter, name = "MAX_CLUSTER_COUNT")]
    pub max_cluster_count: Option<u32>,
    #[ddl(parameter, name = "MIN_CLUSTER_COUNT")]
    pub min_cluster_count: Option<u32>,
    #[ddl(parameter, name = "SCALING_POLICY")]
    pub scaling_policy: Option<ScalingPolicy>,
    #[ddl(parameter, name = "AUTO_SUSPEND")]
    pub auto_suspend: Option<u32>,
    #[ddl(parameter, name = "AUTO_RESUME")]
    pub auto_resume: Option<bool>,
    #[ddl(parameter, name = "RESOURCE_MONITOR")]
    pub resource_monitor: Option<AccountObjectIdentifier>,
    #[ddl(parameter, single_quotes, name = "COMMENT")]
    pub comment: Option<String>,
    #[ddl(parameter, name = "ENABLE_QUERY_ACCELERATION")]
    pub enable_query_acceleration: Option<bool>,
    #[ddl(parameter, name = "QUERY_ACCELERATION_MAX_SCALE_FACTOR")]
    pub query_acceleration_max_scale_factor: Option<u32>,
    #[ddl(parameter, name = "STATEMENT_TIMEOUT_IN_SECONDS")]
    pub statement_timeout_in_seconds: Option<u32>,
    #[ddl(parameter, name = "STATEMENT_QUEUED_TIMEOUT_IN_SECONDS")]
    pub statement_queued_timeout_in_seconds: Option<u32>,
    #[ddl(parameter, name = "MAX_CONCURRENCY_LEVEL")]
    pub max_concurrency_level: Option<u32>,
}

#[derive(Debug, Clone, Ddl)]
pub struct AlterWarehouseOptions {
    #[ddl(static, name = "ALTER WAREHOUSE")]
    alter: (),
    #[ddl(keyword, name = "IF EXISTS")]
    pub if_exists: Option<bool>,
    #[ddl(identifier)]
    pub name: AccountObjectIdentifier,

    #[ddl(keyword, name = "SUSPEND")]
    pub suspend: Option<bool>,
    #[ddl(keyword, name = "RESUME")]
    pub resume: Option<bool>,
    #[ddl(keyword, name = "IF SUSPENDED")]
    pub if_suspended: Option<bool>,
    #[ddl(keyword, name = "ABORT ALL QUERIES")]
    pub abort_all_queries: Option<bool>,
    #[ddl(command, name = "RENAME TO")]
    pub new_name: Option<AccountObjectIdentifier>,
    #[ddl(keyword, name = "SET")]
    pub set: Option<WarehouseSet>,
    #[ddl(list, no_parentheses, name = "UNSET")]
    pub unset: Option<Vec<WarehouseProperty>>,
}

impl AlterWarehouseOptions {
    pub fn new(name: AccountObjectIdentifier) -> Self {
        Self {
            alter: (),
            if_exists: None,
            name,
            suspend: None,
            resume: None,
            if_suspended: None,
            abort_all_queries: None,
            new_name: None,
            set: None,
            unset: None,
        }
    }
}

impl Statement for AlterWarehouseOptions {
    fn validate(&self) -> DdlResult<()> {
        let resume = self.resume == Some(true);
        exactly_one(
            "ALTER WAREHOUSE",
            &[
                ("SUSPEND", self.suspend == Some(true)),
                ("RESUME", resume),
                ("ABORT ALL QUERIES", self.abort_all_queries == Some(true)),
                ("RENAME TO", self.new_name.is_some()),
                ("SET", self.set.is_some()),
                ("UNSET", self.unset.as_ref().is_some_and(|u| !u.is_empty())),
            ],
        )?;
        if self.if_suspended == Some(true) && !resume {
            return Err(DdlError::validation(
                "ALTER WAREHOUSE: IF SUSPENDED requires RESUME",
            ));
        }
        if let Some(set) = &self.set {
            if all_unset(set) {
                return Err(DdlError::validation(
                    "ALTER WAREHOUSE: SET requires at least one property",
                ));
            }
            check_cluster_counts(set.min_cluster_count, set.max_cluster_count)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Ddl)]
pub struct DropWarehouseOptions {
    #[ddl(static, name = "DROP WAREHOUSE")]
    drop: (),
    #[ddl(keyword, name = "IF EXISTS")]
    pub if_exists: Option<bool>,
    #[ddl(identifier)]
    pub name: AccountObjectIdentifier,
}

impl DropWarehouseOptions {
    pub fn new(name: AccountObjectIdentifier) -> Self {
        Self {
            drop: (),
            if_exists: None,
            name,
        }
    }
}

impl Statement for DropWarehouseOptions {}
