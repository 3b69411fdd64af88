use embedded_hal::serial;

// note: the serial error has to implement core::fmt::Debug, because
// CoreRead::Error and CoreWrite::Error require it

impl<T> super::CoreRead for T
where
    T: serial::Read<u8>,
    <T as serial::Read<u8>>::Error: core::fmt::Debug,
{
    type Error = <T as serial::Read<u8>>::Error;

    fn read(&mut self) -> Result<u8, Self::Error> {
        nb::block!(serial::Read::read(self))
    }
}

impl<T> super::CoreWrite for T
where
    T: serial::Write<u8>,
    <T as serial::Write<u8>>::Error: core::fmt::Debug,
{
    type Error = <T as serial::Write<u8>>::Error;

    fn write(&mut self, val: u8) -> Result<(), Self::Error> {
        nb::block!(serial::Write::write(self, val))
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        nb::block!(serial::Write::flush(self))
    }
}
