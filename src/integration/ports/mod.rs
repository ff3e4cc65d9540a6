//! Port contracts for CRM integrations.

pub mod connector;

pub use connector::{ConnectorError, ConnectorResult, CrmConnector};
