//! Applicability gate
//!
//! Content blockers only leave a reliable trace in engines that keep them
//! enabled in both regular and private browsing: Safari (desktop and mobile)
//! and every Android browser. Everywhere else detection reports no signal.

bitflags::bitflags! {
    /// Browser feature-presence facts used to guess the engine family.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EngineSignals: u32 {
        // WebKit
        const APPLE_PAY_ERROR = 1 << 0;
        const CSS_PRIMITIVE_VALUE = 1 << 1;
        const COUNTER = 1 << 2;
        const VENDOR_APPLE = 1 << 3;
        const RGB_COLOR = 1 << 4;
        const WEBKIT_MEDIA_KEYS = 1 << 5;

        // Chromium
        const WEBKIT_PERSISTENT = 1 << 6;
        const WEBKIT_TEMPORARY_STORAGE = 1 << 7;
        const VENDOR_GOOGLE = 1 << 8;
        const WEBKIT_RESOLVE_LOCAL_FILE_SYSTEM_URL = 1 << 9;
        const BATTERY_MANAGER = 1 << 10;
        const WEBKIT_MEDIA_STREAM = 1 << 11;
        const WEBKIT_SPEECH_GRAMMAR = 1 << 12;

        // Gecko
        const BUILD_ID = 1 << 13;
        const MOZ_APPEARANCE = 1 << 14;
        const ON_MOZ_FULLSCREEN_CHANGE = 1 << 15;
        const MOZ_INNER_SCREEN_X = 1 << 16;
        const CSS_MOZ_DOCUMENT_RULE = 1 << 17;
        const CANVAS_CAPTURE_MEDIA_STREAM = 1 << 18;

        // Android on Chromium
        const NO_SHARED_WORKER = 1 << 19;
        const CONNECTION_ON_TYPE_CHANGE = 1 << 20;
        const NO_AUDIO_SINK_ID = 1 << 21;

        // Android on Gecko
        const ON_ORIENTATION_CHANGE = 1 << 22;
        const ORIENTATION = 1 << 23;
        const APP_VERSION_ANDROID = 1 << 24;

        const WEBKIT = Self::APPLE_PAY_ERROR.bits()
            | Self::CSS_PRIMITIVE_VALUE.bits()
            | Self::COUNTER.bits()
            | Self::VENDOR_APPLE.bits()
            | Self::RGB_COLOR.bits()
            | Self::WEBKIT_MEDIA_KEYS.bits();
        const CHROMIUM = Self::WEBKIT_PERSISTENT.bits()
            | Self::WEBKIT_TEMPORARY_STORAGE.bits()
            | Self::VENDOR_GOOGLE.bits()
            | Self::WEBKIT_RESOLVE_LOCAL_FILE_SYSTEM_URL.bits()
            | Self::BATTERY_MANAGER.bits()
            | Self::WEBKIT_MEDIA_STREAM.bits()
            | Self::WEBKIT_SPEECH_GRAMMAR.bits();
        const GECKO = Self::BUILD_ID.bits()
            | Self::MOZ_APPEARANCE.bits()
            | Self::ON_MOZ_FULLSCREEN_CHANGE.bits()
            | Self::MOZ_INNER_SCREEN_X.bits()
            | Self::CSS_MOZ_DOCUMENT_RULE.bits()
            | Self::CANVAS_CAPTURE_MEDIA_STREAM.bits();
        const CHROMIUM_ANDROID = Self::NO_SHARED_WORKER.bits()
            | Self::CONNECTION_ON_TYPE_CHANGE.bits()
            | Self::NO_AUDIO_SINK_ID.bits();
        const GECKO_ANDROID = Self::ON_ORIENTATION_CHANGE.bits()
            | Self::ORIENTATION.bits()
            | Self::APP_VERSION_ANDROID.bits();
    }
}

impl EngineSignals {
    fn votes(self, group: EngineSignals) -> u32 {
        (self & group).bits().count_ones()
    }

    pub fn is_webkit(self) -> bool {
        self.votes(Self::WEBKIT) >= 4
    }

    pub fn is_chromium(self) -> bool {
        self.votes(Self::CHROMIUM) >= 5
    }

    pub fn is_gecko(self) -> bool {
        self.votes(Self::GECKO) >= 4
    }

    pub fn is_android(self) -> bool {
        if self.is_chromium() {
            self.votes(Self::CHROMIUM_ANDROID) >= 2
        } else if self.is_gecko() {
            self.votes(Self::GECKO_ANDROID) >= 2
        } else {
            false
        }
    }
}

/// Decides whether blocking signals survive in the current environment.
pub trait Applicability {
    fn is_applicable(&self) -> bool;
}

impl Applicability for bool {
    fn is_applicable(&self) -> bool {
        *self
    }
}

impl Applicability for EngineSignals {
    fn is_applicable(&self) -> bool {
        self.is_webkit() || self.is_android()
    }
}
