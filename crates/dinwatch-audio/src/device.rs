use cpal::traits::{DeviceTrait, HostTrait};
use cpal::Device;
use dinwatch_foundation::AudioError;

/// Open the named input device, or the host default when no name is given.
pub fn open_input_device(name: Option<&str>) -> Result<Device, AudioError> {
    let host = cpal::default_host();

    let device = match name {
        Some(wanted) => host
            .input_devices()?
            .find(|d| d.name().map(|n| n == wanted).unwrap_or(false)),
        None => host.default_input_device(),
    };

    let device = device.ok_or_else(|| AudioError::DeviceNotFound {
        name: name.map(str::to_owned),
    })?;

    if let Ok(n) = device.name() {
        tracing::info!("Selected input device: {} (host: {:?})", n, host.id());
    }
    Ok(device)
}
