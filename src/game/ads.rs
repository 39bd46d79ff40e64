//! Ad-event sink
//!
//! The engine announces when an ad would be shown; what happens next is up
//! to the sink. Outcomes never flow back into game state (rewards come in
//! through `GuessEngine::grant_lives`).

/// An ad the engine would like shown or prepared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdRequest {
    /// Full-screen ad on the reveal cadence
    Interstitial,
    /// Prepare a rewarded ad after a loss, for the "more lives" offer
    PreloadRewarded,
}

/// Receiver for ad requests
pub trait AdSink {
    fn request(&mut self, request: AdRequest);
}

/// Sink that drops every request
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAds;

impl AdSink for NoAds {
    fn request(&mut self, _request: AdRequest) {}
}

/// Sink that only logs requests
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingAds;

impl AdSink for LoggingAds {
    fn request(&mut self, request: AdRequest) {
        tracing::info!(?request, "Ad requested");
    }
}

/// Recording sink, handy for inspecting what a session asked for
impl AdSink for Vec<AdRequest> {
    fn request(&mut self, request: AdRequest) {
        self.push(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_records_in_order() {
        let mut sink: Vec<AdRequest> = Vec::new();
        sink.request(AdRequest::Interstitial);
        sink.request(AdRequest::PreloadRewarded);
        assert_eq!(sink, vec![AdRequest::Interstitial, AdRequest::PreloadRewarded]);
    }
}
