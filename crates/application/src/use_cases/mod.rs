pub mod records;

pub use records::{
    CreateRecordUseCase, DeleteRecordUseCase, ListRecordsUseCase, UpdateRecordUseCase,
};
