//! Unit tests for CRM integrations.
