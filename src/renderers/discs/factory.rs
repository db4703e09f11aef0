use crate::controllers::interactive::ports::renderer::RendererFactoryPort;
use crate::core::data::step_sequence::StepSequence;
use crate::renderers::discs::renderer::DiscRenderer;
use crate::renderers::discs::scene::{Scene, SceneError};

/// Builds [`DiscRenderer`]s from JSON scene sources.
///
/// A missing source yields [`Scene::sample`]. Renderers take their pass layout from
/// the step sequence handed over by the controller.
#[derive(Debug, Clone, Copy)]
pub struct DiscRendererFactory;

impl RendererFactoryPort for DiscRendererFactory {
    type Renderer = DiscRenderer;
    type Error = SceneError;

    fn create(
        &self,
        scene_source: Option<&str>,
        steps: &StepSequence,
    ) -> Result<DiscRenderer, SceneError> {
        let scene = match scene_source {
            Some(source) => Scene::parse(source)?,
            None => Scene::sample(),
        };

        Ok(DiscRenderer::new(scene, steps.clone()))
    }
}
