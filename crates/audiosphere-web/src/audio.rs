use audiosphere_core::{AudioLoadError, PlaybackHandle, Spectrum};
use js_sys::ArrayBuffer;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Audio context plus the analyser every session is routed through.
#[derive(Clone)]
pub struct AudioGraph {
    pub ctx: web::AudioContext,
    pub analyser: web::AnalyserNode,
}

/// One decoded buffer playing through the analyser.
pub struct BufferSession {
    source: web::AudioBufferSourceNode,
    pub duration_sec: f64,
}

impl PlaybackHandle for BufferSession {
    fn release(&mut self) {
        #[allow(deprecated)]
        let stopped = self.source.stop();
        if let Err(e) = stopped {
            log::warn!("[audio] stop error: {:?}", e);
        }
        _ = self.source.disconnect();
    }
}

pub fn build_graph(fft_size: u32) -> anyhow::Result<(AudioGraph, Spectrum)> {
    let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let (analyser, spectrum) = create_analyser(&ctx, fft_size)?;
    // Routed once; every session connects into the analyser only.
    analyser
        .connect_with_audio_node(&ctx.destination())
        .map_err(|e| anyhow::anyhow!("analyser connect: {:?}", e))?;
    log::info!(
        "[audio] sample_rate={} fft_size={} bins={}",
        ctx.sample_rate(),
        fft_size,
        analyser.frequency_bin_count()
    );
    Ok((AudioGraph { ctx, analyser }, spectrum))
}

// Create analyser and an appropriately sized buffer
pub fn create_analyser(
    audio_ctx: &web::AudioContext,
    fft_size: u32,
) -> anyhow::Result<(web::AnalyserNode, Spectrum)> {
    let spectrum = Spectrum::for_fft_size(fft_size)?;
    let analyser = web::AnalyserNode::new(audio_ctx).map_err(|e| {
        log::error!("AnalyserNode error: {:?}", e);
        anyhow::anyhow!("AnalyserNode error: {:?}", e)
    })?;
    analyser.set_fft_size(fft_size);
    let bins = analyser.frequency_bin_count() as usize;
    let spectrum = if bins == spectrum.len() {
        spectrum
    } else {
        Spectrum::with_bin_count(bins)
    };
    Ok((analyser, spectrum))
}

impl AudioGraph {
    /// Copy the analyser's current byte spectrum into `spectrum`.
    pub fn sample(&self, spectrum: &mut Spectrum) {
        self.analyser.get_byte_frequency_data(spectrum.as_mut_slice());
    }

    /// Browsers start contexts suspended until a user gesture.
    pub fn resume(&self) {
        if self.ctx.state() != web::AudioContextState::Running {
            _ = self.ctx.resume();
        }
    }

    pub async fn decode(&self, bytes: &ArrayBuffer) -> Result<web::AudioBuffer, AudioLoadError> {
        let promise = self
            .ctx
            .decode_audio_data(bytes)
            .map_err(|e| AudioLoadError::Decode(format!("{:?}", e)))?;
        let value = JsFuture::from(promise)
            .await
            .map_err(|e| AudioLoadError::Decode(format!("{:?}", e)))?;
        value
            .dyn_into::<web::AudioBuffer>()
            .map_err(|e| AudioLoadError::Decode(format!("not an AudioBuffer: {:?}", e)))
    }

    /// Build a source for `buffer`, wire it into the analyser and start it.
    pub fn start_session(&self, buffer: &web::AudioBuffer) -> Result<BufferSession, AudioLoadError> {
        let source = self
            .ctx
            .create_buffer_source()
            .map_err(|e| AudioLoadError::Decode(format!("create_buffer_source: {:?}", e)))?;
        source.set_buffer(Some(buffer));
        source
            .connect_with_audio_node(&self.analyser)
            .map_err(|e| AudioLoadError::Decode(format!("connect: {:?}", e)))?;
        #[allow(deprecated)]
        let started = source.start();
        if let Err(e) = started {
            _ = source.disconnect();
            return Err(AudioLoadError::Decode(format!("start: {:?}", e)));
        }
        Ok(BufferSession {
            source,
            duration_sec: buffer.duration(),
        })
    }
}

/// Read the whole file into memory.
pub async fn read_file(file: &web::File) -> Result<ArrayBuffer, AudioLoadError> {
    let value = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| AudioLoadError::Read(format!("{:?}", e)))?;
    value
        .dyn_into::<ArrayBuffer>()
        .map_err(|e| AudioLoadError::Read(format!("not an ArrayBuffer: {:?}", e)))
}
