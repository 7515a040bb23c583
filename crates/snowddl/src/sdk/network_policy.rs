//! Attaching network policies to the account or to a user.

use super::{Statement, exactly_one};
use crate::Ddl;
use crate::error::DdlResult;
use crate::ident::AccountObjectIdentifier;

/// `SET NETWORK_POLICY = "<policy>"`
#[derive(Debug, Clone, Ddl)]
pub struct NetworkPolicySet {
    #[ddl(parameter, name = "NETWORK_POLICY")]
    pub network_policy: AccountObjectIdentifier,
}

/// `UNSET NETWORK_POLICY`
#[derive(Debug, Clone, Default, Ddl)]
pub struct NetworkPolicyUnset {
    #[ddl(static, name = "NETWORK_POLICY")]
    network_policy: (),
}

#[derive(Debug, Clone, Default, Ddl)]
pub struct AlterAccountOptions {
    #[ddl(static, name = "ALTER ACCOUNT")]
    alter: (),
    #[ddl(keyword, name = "SET")]
    pub set: Option<NetworkPolicySet>,
    #[ddl(keyword, name = "UNSET")]
    pub unset: Option<NetworkPolicyUnset>,
}

impl AlterAccountOptions {
    pub fn set_network_policy(policy: AccountObjectIdentifier) -> Self {
        Self {
            set: Some(NetworkPolicySet {
                network_policy: policy,
            }),
            ..Default::default()
        }
    }

    pub fn unset_network_policy() -> Self {
        Self {
            unset: Some(NetworkPolicyUnset::default()),
            ..Default::default()
        }
    }
}

impl Statement for AlterAccountOptions {
    fn validate(&self) -> DdlResult<()> {
        exactly_one(
            "ALTER ACCOUNT",
            &[("SET", self.set.is_some()), ("UNSET", self.unset.is_some())],
        )
    }
}

#[derive(Debug, Clone, Ddl)]
pub struct AlterUserOptions {
    #[ddl(static, name = "ALTER USER")]
    alter: (),
    #[ddl(keyword, name = "IF EXISTS")]
    pub if_exists: Option<bool>,
    #[ddl(identifier)]
    pub name: AccountObjectIdentifier,
    #[ddl(keyword, name = "SET")]
    pub set: Option<NetworkPolicySet>,
    #[ddl(keyword, name = "UNSET")]
    pub unset: Option<NetworkPolicyUnset>,
}

impl AlterUserOptions {
    pub fn new(name: AccountObjectIdentifier) -> Self {
        Self {
            alter: (),
            if_exists: None,
            name,
            set: None,
            unset: None,
        }
    }

    pub fn set_network_policy(
        name: AccountObjectIdentifier,
        policy: AccountObjectIdentifier,
    ) -> Self {
        Self {
            set: Some(NetworkPolicySet {
                network_policy: policy,
            }),
            ..Self::new(name)
        }
    }

    pub fn unset_network_policy(name: AccountObjectIdentifier) -> Self {
        Self {
            unset: Some(NetworkPolicyUnset::default()),
            ..Self::new(name)
        }
    }
}

impl Statement for AlterUserOptions {
    fn validate(&self) -> DdlResult<()> {
        exactly_one(
            "ALTER USER",
            &[("SET", self.set.is_some()), ("UNSET", self.unset.is_some())],
        )
    }
}
