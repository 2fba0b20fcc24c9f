use std::sync::Arc;

use auto_external_common::NormalizedAutoExternalOptions;
use auto_external_resolver::ModuleResolver;

pub type SharedModuleResolver = Arc<dyn ModuleResolver>;
pub type SharedOptions = Arc<NormalizedAutoExternalOptions>;
