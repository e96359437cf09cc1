//! # Service Registry - 싱글톤 의존성 주입
//!
//! `#[service]` 매크로로 선언된 서비스와 `ServiceLocator::set()`으로 직접 등록한
//! 인프라 컴포넌트를 타입별 싱글톤으로 관리합니다.
//!
//! ## 동작 방식
//!
//! ```text
//! 1. 컴파일 타임
//!    └─ #[service] 매크로 → ServiceRegistration 생성 → inventory::collect!
//!
//! 2. 런타임 초기화 (main.rs)
//!    └─ ServiceLocator::set(Arc<AuthClient>)   ← 외부 인증 클라이언트 직접 등록
//!
//! 3. 의존성 주입
//!    ├─ RelayService::instance() → ServiceLocator::get::<RelayService>()
//!    ├─ Arc<AuthClient> 필드 → ServiceLocator::get::<AuthClient>()
//!    └─ 생성된 인스턴스는 캐싱되어 이후 같은 Arc를 반환
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! #[service(name = "relay")]
//! pub struct RelayService {
//!     auth_client: Arc<AuthClient>,   // 자동 주입
//! }
//!
//! ServiceLocator::set(Arc::new(AuthClient::new(config)?));
//! ServiceLocator::initialize_all().await?;
//!
//! let relay = RelayService::instance();
//! ```

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use crate::utils::display_terminal::{print_boxed_title, print_final_summary, print_step_complete, print_step_start, print_sub_task};

/// `#[service]` 매크로가 구현하는 서비스 trait
#[async_trait]
pub trait Service: Send + Sync {
    fn name(&self) -> &str;

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 매크로가 inventory에 제출하는 서비스 등록 정보
pub struct ServiceRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);

/// 정리된 이름("relay_service" -> "relay") → 등록 정보
static SERVICE_NAME_CACHE: Lazy<HashMap<String, &'static ServiceRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<ServiceRegistration>()
        .map(|registration| (extract_clean_name(registration.name), registration))
        .collect();

    log::debug!("Service 레지스트리 캐시 구성: {}개", cache.len());
    cache
});

fn extract_clean_name(name: &str) -> String {
    name.strip_suffix("_service").unwrap_or(name).to_string()
}

/// 전역 싱글톤 컨테이너
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    initializing: RwLock<HashSet<TypeId>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            initializing: RwLock::new(HashSet::new()),
        }
    }

    /// 타입 `T`의 싱글톤을 반환합니다.
    ///
    /// 등록된 인스턴스가 없으면 `#[service]` 등록 정보로 생성합니다.
    ///
    /// # Panics
    ///
    /// * 순환 의존성이 감지된 경우
    /// * `T`가 `set()`으로도 `#[service]`로도 등록되지 않은 경우
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        if let Some(instance) = Self::cached::<T>(type_id) {
            return instance;
        }

        {
            let mut initializing = LOCATOR
                .initializing
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            if !initializing.insert(type_id) {
                log::error!("순환 의존성 감지: {}", type_name);
                panic!("Circular dependency detected: {} is already being initialized", type_name);
            }
        }

        let result = std::panic::catch_unwind(|| Self::construct::<T>(type_id, type_name));

        LOCATOR
            .initializing
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&type_id);

        match result {
            Ok(instance) => instance,
            Err(e) => {
                log::error!("인스턴스 생성 실패 {}: {:?}", type_name, e);
                panic!("Failed to create instance for {}", type_name);
            }
        }
    }

    fn cached<T: 'static + Send + Sync>(type_id: TypeId) -> Option<Arc<T>> {
        let instances = LOCATOR.instances.read().unwrap_or_else(PoisonError::into_inner);
        instances
            .get(&type_id)
            .and_then(|instance| instance.clone().downcast::<T>().ok())
    }

    fn construct<T: 'static + Send + Sync>(type_id: TypeId, type_name: &str) -> Arc<T> {
        if let Some(instance) = Self::cached::<T>(type_id) {
            return instance;
        }

        let clean_type_name = Self::extract_clean_type_name(type_name);
        let entity_name = clean_type_name
            .strip_suffix("Service")
            .unwrap_or(&clean_type_name)
            .to_lowercase();

        let registration = SERVICE_NAME_CACHE.get(&entity_name).unwrap_or_else(|| {
            panic!(
                "Service not found: {}. Register it with #[service] or ServiceLocator::set()",
                type_name
            )
        });

        // 생성자 안에서 의존성 get()이 다시 호출되므로 쓰기 락을 잡지 않습니다.
        let boxed_instance = (registration.constructor)();
        let instance = match boxed_instance.downcast::<Arc<T>>() {
            Ok(arc_instance) => (*arc_instance).clone(),
            Err(_) => panic!("Type mismatch for service: {}", registration.name),
        };

        let mut instances = LOCATOR.instances.write().unwrap_or_else(PoisonError::into_inner);
        let stored = instances
            .entry(type_id)
            .or_insert_with(|| instance.clone() as Arc<dyn Any + Send + Sync>)
            .clone();

        stored.downcast::<T>().unwrap_or(instance)
    }

    fn extract_clean_type_name(type_name: &str) -> String {
        match type_name.rfind("::") {
            Some(pos) => type_name[pos + 2..].to_string(),
            None => type_name.to_string(),
        }
    }

    /// 외부에서 생성한 인스턴스를 등록합니다. 같은 타입이 있으면 교체합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_id = TypeId::of::<T>();
        let clean_name = Self::extract_clean_type_name(std::any::type_name::<T>());

        log::info!("📦 Registering: {}", clean_name);

        let mut instances = LOCATOR.instances.write().unwrap_or_else(PoisonError::into_inner);
        instances.insert(type_id, instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 인스턴스가 있는지 확인합니다.
    pub fn contains<T: 'static + Send + Sync>() -> bool {
        Self::cached::<T>(TypeId::of::<T>()).is_some()
    }

    /// 모든 `#[service]` 인스턴스를 미리 생성합니다.
    ///
    /// 의존성이 빠져 있으면 요청 처리 중이 아니라 서버 시작 시점에 실패합니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let registrations: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        let service_count = registrations.len();

        if service_count > 0 {
            print_step_start(1, "Creating Service instances");

            for registration in registrations {
                print_sub_task(registration.name, "Creating...");
                let _boxed_instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(1, "Service instances created", service_count);
        }

        print_final_summary(service_count);

        Ok(())
    }
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

#[cfg(test)]
mod tests {
    use super::*;

    struct ManualComponent {
        value: u32,
    }

    #[test]
    fn test_extract_clean_name() {
        assert_eq!(extract_clean_name("relay_service"), "relay");
        assert_eq!(extract_clean_name("relay"), "relay");
    }

    #[test]
    fn test_extract_clean_type_name() {
        assert_eq!(
            ServiceLocator::extract_clean_type_name("auth_relay_backend::services::RelayService"),
            "RelayService"
        );
        assert_eq!(ServiceLocator::extract_clean_type_name("RelayService"), "RelayService");
    }

    #[test]
    fn test_set_then_get_returns_same_instance() {
        ServiceLocator::set(Arc::new(ManualComponent { value: 7 }));

        assert!(ServiceLocator::contains::<ManualComponent>());
        let first = ServiceLocator::get::<ManualComponent>();
        let second = ServiceLocator::get::<ManualComponent>();

        assert_eq!(first.value, 7);
        assert!(Arc::ptr_eq(&first, &second));
    }
}
