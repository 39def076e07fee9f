//! Application state shared across all handlers.

use std::sync::Arc;

use assetdesk_auth::password::{PasswordHasher, PasswordValidator};
use assetdesk_auth::token::SessionCodec;
use assetdesk_core::config::AppConfig;
use assetdesk_database::DatabasePool;

use assetdesk_database::repositories::account::AccountRepository;
use assetdesk_database::repositories::department::DepartmentRepository;
use assetdesk_database::repositories::device::DeviceRepository;
use assetdesk_database::repositories::division::DivisionRepository;
use assetdesk_database::repositories::employee::EmployeeRepository;
use assetdesk_database::repositories::hierarchy::HierarchyRepository;
use assetdesk_database::repositories::phone::PhoneLineRepository;
use assetdesk_database::repositories::settings::OrgSettingsRepository;

use assetdesk_service::account::AccountService;
use assetdesk_service::auth::AuthService;
use assetdesk_service::department::DepartmentService;
use assetdesk_service::device::DeviceService;
use assetdesk_service::division::DivisionService;
use assetdesk_service::employee::EmployeeService;
use assetdesk_service::hierarchy::HierarchyService;
use assetdesk_service::phone::PhoneLineService;
use assetdesk_service::settings::SettingsService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Database pool handle, for health checks.
    pub db: DatabasePool,

    /// Auth service.
    pub auth_service: Arc<AuthService>,
    /// Hierarchy resolution service.
    pub hierarchy_service: Arc<HierarchyService>,
    /// Account management service.
    pub account_service: Arc<AccountService>,
    /// Employee service.
    pub employee_service: Arc<EmployeeService>,
    /// Department service.
    pub department_service: Arc<DepartmentService>,
    /// Division service.
    pub division_service: Arc<DivisionService>,
    /// Device service.
    pub device_service: Arc<DeviceService>,
    /// Phone line service.
    pub phone_service: Arc<PhoneLineService>,
    /// Settings service.
    pub settings_service: Arc<SettingsService>,
}

impl AppState {
    /// Wires up repositories and services on top of a connection pool.
    pub fn new(config: Arc<AppConfig>, db: DatabasePool) -> Self {
        let pool = db.pool().clone();

        let account_repo = Arc::new(AccountRepository::new(pool.clone()));
        let employee_repo = Arc::new(EmployeeRepository::new(pool.clone()));
        let department_repo = Arc::new(DepartmentRepository::new(pool.clone()));
        let division_repo = Arc::new(DivisionRepository::new(pool.clone()));
        let device_repo = Arc::new(DeviceRepository::new(pool.clone()));
        let phone_repo = Arc::new(PhoneLineRepository::new(pool.clone()));
        let settings_repo = Arc::new(OrgSettingsRepository::new(pool.clone()));
        let hierarchy_repo = Arc::new(HierarchyRepository::new(pool));

        let hasher = Arc::new(PasswordHasher::new());
        let validator = Arc::new(PasswordValidator::new(&config.auth));
        let session_codec = Arc::new(SessionCodec::new(&config.auth));

        let hierarchy_service = Arc::new(HierarchyService::new(hierarchy_repo));

        Self {
            auth_service: Arc::new(AuthService::new(
                account_repo.clone(),
                hasher.clone(),
                session_codec,
            )),
            account_service: Arc::new(AccountService::new(account_repo, hasher, validator)),
            employee_service: Arc::new(EmployeeService::new(
                employee_repo.clone(),
                department_repo.clone(),
            )),
            department_service: Arc::new(DepartmentService::new(
                department_repo,
                division_repo.clone(),
            )),
            division_service: Arc::new(DivisionService::new(
                division_repo,
                employee_repo.clone(),
            )),
            device_service: Arc::new(DeviceService::new(
                device_repo,
                employee_repo.clone(),
                hierarchy_service.clone(),
            )),
            phone_service: Arc::new(PhoneLineService::new(
                phone_repo,
                employee_repo.clone(),
                hierarchy_service.clone(),
            )),
            settings_service: Arc::new(SettingsService::new(settings_repo, employee_repo)),
            hierarchy_service,
            config,
            db,
        }
    }
}
