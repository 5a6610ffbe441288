use gradle_jvmargs_core::PropertiesFinder;
use gradle_jvmargs_gradle::GradlePropertiesFinder;

// finder list

pub fn get_finders() -> [Box<dyn PropertiesFinder>; 1] {
    [Box::new(GradlePropertiesFinder::new())]
}
