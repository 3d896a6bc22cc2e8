//! Camera acquisition and QR decoding. Frame capture runs on the UI
//! thread: the loop grabs a still from the video element, converts it
//! to greyscale and hands it to the decoder. The loop stops on the
//! first successful decode or when the handle is dropped.

/// Decode the first QR code found in a greyscale frame.
pub fn decode_qr_luma(width: usize, height: usize, luma: &[u8]) -> Option<String> {
    if luma.len() != width * height {
        return None;
    }
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(width, height, |x, y| {
        luma[y * width + x]
    });
    prepared
        .detect_grids()
        .into_iter()
        .find_map(|grid| grid.decode().map(|(_, content)| content).ok())
}

/// Convert an RGBA frame (as produced by a canvas 2d context) to
/// 8-bit luma using BT.601 weights.
pub fn rgba_to_luma(rgba: &[u8]) -> Vec<u8> {
    rgba.chunks_exact(4)
        .map(|px| {
            let r = px[0] as u32;
            let g = px[1] as u32;
            let b = px[2] as u32;
            ((r * 299 + g * 587 + b * 114) / 1000) as u8
        })
        .collect()
}

#[cfg(target_arch = "wasm32")]
pub use camera::CameraScanner;

#[cfg(target_arch = "wasm32")]
mod camera {
    use super::{decode_qr_luma, rgba_to_luma};
    use gloo_timers::future::TimeoutFuture;
    use leptos::{html, spawn_local, NodeRef};
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{MediaStream, MediaStreamConstraints};

    const FRAME_INTERVAL_MS: u32 = 250;

    /// Owns the media stream for one scan session. Dropping the handle
    /// (or calling [`CameraScanner::stop`]) stops the capture loop and
    /// releases every camera track.
    pub struct CameraScanner {
        stream: Rc<Cell<Option<MediaStream>>>,
        stopped: Rc<Cell<bool>>,
    }

    impl CameraScanner {
        pub fn start(
            video_ref: NodeRef<html::Video>,
            canvas_ref: NodeRef<html::Canvas>,
            on_decode: impl Fn(String) + 'static,
        ) -> Self {
            let stream_slot: Rc<Cell<Option<MediaStream>>> = Rc::new(Cell::new(None));
            let stopped = Rc::new(Cell::new(false));

            let scanner = Self {
                stream: stream_slot.clone(),
                stopped: stopped.clone(),
            };

            spawn_local(async move {
                let stream = match acquire_stream().await {
                    Ok(stream) => stream,
                    Err(err) => {
                        log::error!("kamera tidak tersedia: {:?}", err);
                        return;
                    }
                };
                if stopped.get() {
                    stop_tracks(&stream);
                    return;
                }
                if let Some(video) = video_ref.get_untracked() {
                    video.set_src_object(Some(&stream));
                    let _ = video.play();
                }
                stream_slot.set(Some(stream.clone()));

                loop {
                    TimeoutFuture::new(FRAME_INTERVAL_MS).await;
                    if stopped.get() {
                        break;
                    }
                    if let Some(code) = grab_and_decode(&video_ref, &canvas_ref) {
                        stopped.set(true);
                        stream_slot.set(None);
                        stop_tracks(&stream);
                        on_decode(code);
                        return;
                    }
                }
                stream_slot.set(None);
                stop_tracks(&stream);
            });

            scanner
        }

        pub fn stop(&self) {
            self.stopped.set(true);
            if let Some(stream) = self.stream.take() {
                stop_tracks(&stream);
            }
        }
    }

    impl Drop for CameraScanner {
        fn drop(&mut self) {
            self.stop();
        }
    }

    async fn acquire_stream() -> Result<MediaStream, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let devices = window.navigator().media_devices()?;
        let constraints = MediaStreamConstraints::new();
        let video: JsValue = {
            let opts = js_sys::Object::new();
            js_sys::Reflect::set(
                &opts,
                &JsValue::from_str("facingMode"),
                &JsValue::from_str("environment"),
            )?;
            opts.into()
        };
        constraints.set_video(&video);
        let promise = devices.get_user_media_with_constraints(&constraints)?;
        let stream = JsFuture::from(promise).await?;
        stream.dyn_into::<MediaStream>()
    }

    fn stop_tracks(stream: &MediaStream) {
        for track in stream.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<web_sys::MediaStreamTrack>() {
                track.stop();
            }
        }
    }

    fn grab_and_decode(
        video_ref: &NodeRef<html::Video>,
        canvas_ref: &NodeRef<html::Canvas>,
    ) -> Option<String> {
        let video = video_ref.get_untracked()?;
        let canvas = canvas_ref.get_untracked()?;
        let width = video.video_width();
        let height = video.video_height();
        if width == 0 || height == 0 {
            return None;
        }
        canvas.set_width(width);
        canvas.set_height(height);
        let context = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<web_sys::CanvasRenderingContext2d>()
            .ok()?;
        context
            .draw_image_with_html_video_element(&video, 0.0, 0.0)
            .ok()?;
        let image_data = context
            .get_image_data(0.0, 0.0, width as f64, height as f64)
            .ok()?;
        let luma = rgba_to_luma(&image_data.data());
        decode_qr_luma(width as usize, height as usize, &luma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luma_conversion_uses_bt601_weights() {
        assert_eq!(rgba_to_luma(&[255, 255, 255, 255]), vec![255]);
        assert_eq!(rgba_to_luma(&[0, 0, 0, 255]), vec![0]);
        // Pure red: 255 * 0.299
        assert_eq!(rgba_to_luma(&[255, 0, 0, 255]), vec![76]);
        // Two pixels in one frame
        assert_eq!(
            rgba_to_luma(&[255, 255, 255, 255, 0, 0, 0, 255]),
            vec![255, 0]
        );
    }

    #[test]
    fn decode_rejects_mismatched_dimensions() {
        assert_eq!(decode_qr_luma(4, 4, &[0u8; 8]), None);
    }

    #[test]
    fn decode_returns_none_for_blank_frame() {
        assert_eq!(decode_qr_luma(32, 32, &[255u8; 32 * 32]), None);
    }
}
