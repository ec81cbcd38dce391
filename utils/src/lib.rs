//! Shared utilities for the Linkshelf workspace.
//!
//! Build and version information used by both `linkshelf-services` (response
//! headers, outbound user agent) and `linkshelf-business` (API client user agent).

pub mod version_info;
