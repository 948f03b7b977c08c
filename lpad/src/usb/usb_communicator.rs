use usb_device::{
    class_prelude::{UsbBus, UsbBusAllocator},
    device::{StringDescriptors, UsbDevice, UsbDeviceBuilder, UsbDeviceState, UsbVidPid},
    LangID, UsbError,
};
use usbd_hid::{descriptor::SerializedDescriptor, hid_class::HIDClass};

use crate::keyboard::{ExternalCommunicator, KeyReport};

use super::{hid_report::HidKeyboardReport, DeviceInfo};

pub struct UsbCommunicator<'a, B: UsbBus> {
    usb_device: UsbDevice<'a, B>,
    keyboard_usb_hid: HIDClass<'a, B>,
}

impl<'a, B: UsbBus> UsbCommunicator<'a, B> {
    /// Polling interval requested from the host, in milliseconds.
    const POLL_MS: u8 = 8;

    pub fn new(
        device_info: DeviceInfo,
        usb_bus_alloc: &'a UsbBusAllocator<B>,
    ) -> UsbCommunicator<'a, B> {
        let keyboard_usb_hid =
            HIDClass::new(usb_bus_alloc, HidKeyboardReport::desc(), Self::POLL_MS);
        let descriptors = StringDescriptors::new(LangID::EN_US)
            .manufacturer(device_info.manufacturer)
            .serial_number(device_info.serial_number)
            .product(device_info.product_name);
        let usb_device = UsbDeviceBuilder::new(
            usb_bus_alloc,
            UsbVidPid(device_info.vendor_id, device_info.product_id),
        )
        .strings(&[descriptors])
        .expect("Failed to create string descriptors")
        .device_class(0)
        .build();

        UsbCommunicator {
            usb_device,
            keyboard_usb_hid,
        }
    }

    /// Must be called at least every 10ms.
    pub fn poll(&mut self) -> bool {
        self.usb_device.poll(&mut [&mut self.keyboard_usb_hid])
    }
}

impl<'a, B: UsbBus> ExternalCommunicator for UsbCommunicator<'a, B> {
    type Error = UsbError;

    fn is_ready(&self) -> bool {
        self.usb_device.state() == UsbDeviceState::Configured
    }

    fn send_report(&self, report: &KeyReport) -> Result<(), UsbError> {
        self.keyboard_usb_hid
            .push_input(&HidKeyboardReport::from(report))
            .map(|_| ())
    }
}
