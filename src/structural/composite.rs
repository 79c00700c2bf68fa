// Composite Pattern: files and folders share one interface, and a folder
// treats its children uniformly whether they are files or other folders.

use crate::console::Console;

pub trait FileSystemComponent {
    fn name(&self) -> &str;

    /// One line per node, children indented two spaces per level.
    fn details(&self, depth: usize, out: &mut Vec<String>);

    fn file_count(&self) -> usize;

    fn show_details(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.details(0, &mut out);
        out
    }
}

pub struct File {
    name: String,
}

impl File {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl FileSystemComponent for File {
    fn name(&self) -> &str {
        &self.name
    }

    fn details(&self, depth: usize, out: &mut Vec<String>) {
        out.push(format!("{}File: {}", indent(depth), self.name));
    }

    fn file_count(&self) -> usize {
        1
    }
}

pub struct Folder {
    name: String,
    children: Vec<Box<dyn FileSystemComponent>>,
}

impl Folder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn add_component(&mut self, component: impl FileSystemComponent + 'static) {
        self.children.push(Box::new(component));
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl FileSystemComponent for Folder {
    fn name(&self) -> &str {
        &self.name
    }

    fn details(&self, depth: usize, out: &mut Vec<String>) {
        out.push(format!("{}Folder: {}", indent(depth), self.name));
        for child in &self.children {
            child.details(depth + 1, out);
        }
    }

    fn file_count(&self) -> usize {
        self.children.iter().map(|c| c.file_count()).sum()
    }
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

fn sample_tree() -> Folder {
    let mut media = Folder::new("My Media");
    media.add_component(File::new("Video1.mp4"));

    let mut documents = Folder::new("My Documents");
    documents.add_component(File::new("Document1.txt"));
    documents.add_component(File::new("Picture1.png"));
    documents.add_component(media);
    documents
}

pub fn demo(console: &mut Console) {
    let root = sample_tree();
    console.lines(root.show_details());
    console.line(format!("{} contains {} file(s)", root.name(), root.file_count()));
}
