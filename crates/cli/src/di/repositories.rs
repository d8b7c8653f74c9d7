use super::DnsServices;
use bramble_dns_application::ports::RecordRepository;
use bramble_dns_infrastructure::repositories::StoreRecordRepository;
use std::sync::Arc;

pub struct Repositories {
    pub records: Arc<dyn RecordRepository>,
}

impl Repositories {
    pub fn new(dns: &DnsServices) -> Self {
        Self {
            records: Arc::new(StoreRecordRepository::new(
                dns.store.clone(),
                dns.persister.clone(),
            )),
        }
    }
}
