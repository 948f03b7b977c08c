#![no_std]
#![no_main]

use core::sync::atomic::{AtomicUsize, Ordering};

use defmt_rtt as _;
use embedded_hal::digital::InputPin;
use fugit::RateExtU32;
use lpad::{
    app::{App, Config},
    random::XorShift,
    usb::{DeviceInfo, UsbCommunicator},
};
use panic_probe as _;
use rgb_keypad::RgbKeypad;
use rp_pico::{
    entry,
    hal::{
        self,
        gpio::{FunctionI2C, FunctionSpi, Pin, PullUp},
        Clock, Timer,
    },
    pac,
};
use usb_device::class_prelude::UsbBusAllocator;
use watchdog_reset::WatchdogReset;

mod entropy;
mod rgb_keypad;
mod watchdog_reset;

#[entry]
fn main() -> ! {
    // These variables must be static due to lifetime constraints
    static mut USB_BUS: Option<UsbBusAllocator<hal::usb::UsbBus>> = None;

    defmt::info!("Launching lpad rgb keypad");

    let mut pac = pac::Peripherals::take().unwrap();
    // The single-cycle I/O block controls our GPIO pins
    let sio = hal::Sio::new(pac.SIO);
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );
    // Set up the watchdog driver - needed by the clock setup code
    let mut watchdog = hal::Watchdog::new(pac.WATCHDOG);
    // The default is to generate a 125 MHz system clock
    let clocks = hal::clocks::init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();
    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    let usb_bus = UsbBusAllocator::new(hal::usb::UsbBus::new(
        pac.USBCTRL_REGS,
        pac.USBCTRL_DPRAM,
        clocks.usb_clock,
        true,
        &mut pac.RESETS,
    ));
    *USB_BUS = Some(usb_bus);

    let sda: Pin<_, FunctionI2C, PullUp> = pins.gpio4.reconfigure();
    let scl: Pin<_, FunctionI2C, PullUp> = pins.gpio5.reconfigure();
    let i2c = hal::I2C::i2c0(
        pac.I2C0,
        sda,
        scl,
        400.kHz(),
        &mut pac.RESETS,
        &clocks.system_clock,
    );

    let spi = hal::Spi::<_, _, _, 8>::new(
        pac.SPI0,
        (
            pins.gpio19.into_function::<FunctionSpi>(),
            pins.gpio18.into_function::<FunctionSpi>(),
        ),
    )
    .init(
        &mut pac.RESETS,
        clocks.peripheral_clock.freq(),
        4.MHz(),
        embedded_hal::spi::MODE_0,
    );
    let keypad = RgbKeypad::new(i2c, spi, pins.gpio17.into_push_pull_output());

    // exits the puzzle, and restarts the board when held
    let mut control = pins.gpio22.into_pull_up_input();

    let device_info = DeviceInfo {
        manufacturer: "lpad",
        vendor_id: 0x1209,
        product_id: 0x4c50,
        product_name: "lpad rgb keypad",
        serial_number: "1",
    };
    let usb_communicator = UsbCommunicator::new(device_info, USB_BUS.as_ref().unwrap());

    let rng = XorShift::from_seed(entropy::seed(pac.ROSC, &timer));

    let mut app = App::new(
        keypad,
        usb_communicator,
        rng,
        WatchdogReset::new(watchdog),
        Config::default(),
    );

    static COUNT: AtomicUsize = AtomicUsize::new(0);
    defmt::timestamp!("{=usize}", {
        // NOTE(no-CAS) `timestamps` runs with interrupts disabled
        let n = COUNT.load(Ordering::Relaxed);
        COUNT.store(n + 1, Ordering::Relaxed);
        n
    });

    if let Err(e) = app.start() {
        defmt::warn!("Startup error: {}", defmt::Debug2Format(&e));
    }

    loop {
        app.communicator.poll();

        let now_millis = (timer.get_counter().ticks() / 1000) as u32;
        let control_held = control.is_low().unwrap_or(false);
        if let Err(e) = app.poll(now_millis, control_held) {
            defmt::warn!("Loop error: {}", defmt::Debug2Format(&e));
        }
    }
}
