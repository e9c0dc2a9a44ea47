//! Concrete resource declarations.
//!
//! Each resource family is a thin specialization of the generic layer: it
//! supplies its envelope keys, composes its path segment (possibly
//! parameterized by parent ids captured at construction), and adds one-line
//! verbs for its resource-specific endpoints.
//!
//! # Hierarchy
//!
//! ```text
//! Client
//! ├── services ──┬── proxy (singleton) ── configs / promote
//! │              ├── metrics ── methods
//! │              │              limits (with an application plan)
//! │              ├── service_plans
//! │              ├── application_plans ── limits (with a metric)
//! │              └── mapping_rules
//! ├── accounts ──┬── users
//! │              └── applications ── keys
//! ├── account_plans
//! ├── providers
//! ├── active_docs
//! ├── webhooks (singleton)
//! └── settings (singleton)
//! ```

mod account;
mod account_plan;
mod account_user;
mod active_doc;
mod application;
mod application_key;
mod application_plan;
mod application_plan_limit;
mod mapping_rule;
mod method;
mod metric;
mod plan;
mod provider;
mod proxy;
mod service;
mod service_plan;
mod settings;
mod webhook;

pub use account::{Account, AccountManager};
pub use account_plan::{AccountPlan, AccountPlanManager};
pub use account_user::{AccountUser, AccountUserManager};
pub use active_doc::{ActiveDoc, ActiveDocManager};
pub use application::{Application, ApplicationManager};
pub use application_key::{ApplicationKey, ApplicationKeyManager};
pub use application_plan::{ApplicationPlan, ApplicationPlanManager};
pub use application_plan_limit::{ApplicationPlanLimit, ApplicationPlanLimitManager};
pub use mapping_rule::{MappingRule, MappingRuleManager};
pub use method::{Method, MethodManager};
pub use metric::{Metric, MetricManager};
pub use plan::DefaultPlan;
pub use provider::{Provider, ProviderManager};
pub use proxy::{Proxy, ProxyManager};
pub use service::{Service, ServiceManager};
pub use service_plan::{ServicePlan, ServicePlanManager};
pub use settings::{Settings, SettingsManager};
pub use webhook::{WebHook, WebHookManager};
