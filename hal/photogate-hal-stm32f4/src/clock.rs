//! Peripheral clock gating

use embassy_stm32::pac;

/// Enable the bus clocks of every peripheral the firmware touches
///
/// GPIOA/B/C, SYSCFG (EXTI routing), I2C1, TIM3 and TIM4.
pub fn enable_peripherals() {
    pac::RCC.ahb1enr().modify(|w| {
        w.set_gpioaen(true);
        w.set_gpioben(true);
        w.set_gpiocen(true);
    });
    pac::RCC.apb1enr().modify(|w| {
        w.set_i2c1en(true);
        w.set_tim3en(true);
        w.set_tim4en(true);
    });
    pac::RCC.apb2enr().modify(|w| w.set_syscfgen(true));

    // Two peripheral clock cycles before the first register access
    cortex_m::asm::dsb();
}
