use crate::database::clock::MockClockRepository;
use crate::server::services::data_services::MockDataServiceTrait;
use crate::server::services::health_services::MockHealthServiceTrait;
use crate::server::services::metrics_services::MockMetricsServiceTrait;

// mocks for the repository seam, the data service is the only thing that talks to it
pub struct DataServiceTestFixture {
    pub mock_repository: MockClockRepository,
}

impl Default for DataServiceTestFixture {
    fn default() -> Self {
        DataServiceTestFixture::new()
    }
}

impl DataServiceTestFixture {
    pub fn new() -> Self {
        Self {
            mock_repository: MockClockRepository::new(),
        }
    }
}

// whole service layer mocked, for exercising the controllers on their own
pub struct ServicesTestFixture {
    pub mock_health: MockHealthServiceTrait,
    pub mock_metrics: MockMetricsServiceTrait,
    pub mock_data: MockDataServiceTrait,
}

impl Default for ServicesTestFixture {
    fn default() -> Self {
        ServicesTestFixture::new()
    }
}

impl ServicesTestFixture {
    pub fn new() -> Self {
        Self {
            mock_health: MockHealthServiceTrait::new(),
            mock_metrics: MockMetricsServiceTrait::new(),
            mock_data: MockDataServiceTrait::new(),
        }
    }
}
