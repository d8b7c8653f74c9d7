use bramble_dns_application::ports::RecordRepository;
use bramble_dns_application::use_cases::{
    CreateRecordUseCase, DeleteRecordUseCase, ListRecordsUseCase, UpdateRecordUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub records: RecordUseCases,
}

#[derive(Clone)]
pub struct RecordUseCases {
    pub create: Arc<CreateRecordUseCase>,
    pub list: Arc<ListRecordsUseCase>,
    pub update: Arc<UpdateRecordUseCase>,
    pub delete: Arc<DeleteRecordUseCase>,
}

impl RecordUseCases {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self {
            create: Arc::new(CreateRecordUseCase::new(repo.clone())),
            list: Arc::new(ListRecordsUseCase::new(repo.clone())),
            update: Arc::new(UpdateRecordUseCase::new(repo.clone())),
            delete: Arc::new(DeleteRecordUseCase::new(repo)),
        }
    }
}

impl AppState {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self {
            records: RecordUseCases::new(repo),
        }
    }
}
