use std::sync::Arc;

use agrireg_core::ProducerId;
use agrireg_infra::repository::InMemoryProducerRepository;
use agrireg_producers::{
    CpfCnpjValidator, CreateProducerRequest, DocumentValidator, Producer, ProducerRepository,
    ProfileUpdateError, RegisterProducer, RegistrationError, StoreResult, UpdateProducerProfile,
    UpdateProfileRequest,
};

type SharedRepository = Arc<dyn ProducerRepository>;
type SharedValidator = Arc<dyn DocumentValidator>;

/// Use cases and the repository they share, built once per process.
pub struct AppServices {
    repository: SharedRepository,
    register: RegisterProducer<SharedRepository, SharedValidator>,
    update_profile: UpdateProducerProfile<SharedRepository, SharedValidator>,
}

impl AppServices {
    pub fn new(repository: SharedRepository, validator: SharedValidator) -> Self {
        Self {
            register: RegisterProducer::new(repository.clone(), validator.clone()),
            update_profile: UpdateProducerProfile::new(repository.clone(), validator),
            repository,
        }
    }

    pub fn register_producer(&self, request: CreateProducerRequest) -> Result<Producer, RegistrationError> {
        self.register.execute(request)
    }

    pub fn update_producer_profile(
        &self,
        request: UpdateProfileRequest,
    ) -> Result<Producer, ProfileUpdateError> {
        self.update_profile.execute(request)
    }

    pub fn producers_list(&self) -> StoreResult<Vec<Producer>> {
        self.repository.find_all()
    }

    pub fn producer_get(&self, id: ProducerId) -> StoreResult<Producer> {
        self.repository.get_by_id(id)
    }

    pub fn producer_by_document(&self, document: &str) -> StoreResult<Producer> {
        self.repository.find_by_document(document)
    }

    pub fn producer_delete(&self, id: ProducerId) -> StoreResult<()> {
        self.repository.delete(id)
    }
}

/// In-memory wiring: one shared store plus the CPF/CNPJ validator.
pub fn build_in_memory_services() -> AppServices {
    let repository: SharedRepository = Arc::new(InMemoryProducerRepository::new());
    let validator: SharedValidator = Arc::new(CpfCnpjValidator::new());
    AppServices::new(repository, validator)
}
