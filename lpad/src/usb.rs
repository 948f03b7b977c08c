mod device_info;
mod hid_report;
mod usb_communicator;

pub use device_info::DeviceInfo;
pub use hid_report::HidKeyboardReport;
pub use usb_communicator::UsbCommunicator;
