/// Runs `future` on the browser's event loop, logging its error under `target` instead of dropping it silently.
#[cfg(target_family = "wasm")]
pub fn spawn_local<F, E>(target: &'static str, future: F)
where
	F: futures_util::Future<Output = Result<(), E>> + 'static,
	E: std::fmt::Display + 'static,
{
	wasm_bindgen_futures::spawn_local(async move {
		if let Err(err) = future.await {
			log::error!(target: target, "{err}");
		}
	});
}
