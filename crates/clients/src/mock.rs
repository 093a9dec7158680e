use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::Result;
use flightwatch_core::models::flight::{DriveEstimate, FlightStatus};
use mockall::mock;

use crate::{EmailSender, FlightSearch, RoutePlanner, SmsSender};

// Mock clients for testing

mock! {
    pub FlightSearchClient {}

    #[async_trait]
    impl FlightSearch for FlightSearchClient {
        async fn search(
            &self,
            flight_iata: &str,
            date: Option<NaiveDate>,
        ) -> Result<Vec<FlightStatus>>;
    }
}

mock! {
    pub RoutePlannerClient {}

    #[async_trait]
    impl RoutePlanner for RoutePlannerClient {
        async fn drive_time(&self, origin: &str, destination: &str) -> Result<DriveEstimate>;
    }
}

mock! {
    pub SmsSenderClient {}

    #[async_trait]
    impl SmsSender for SmsSenderClient {
        async fn send_sms(&self, to: &str, body: &str) -> Result<()>;
    }
}

mock! {
    pub EmailSenderClient {}

    #[async_trait]
    impl EmailSender for EmailSenderClient {
        async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<()>;
    }
}
