use super::KeyReport;

pub trait ExternalCommunicator {
    type Error;
    fn is_ready(&self) -> bool;
    fn send_report(&self, report: &KeyReport) -> Result<(), Self::Error>;
}
