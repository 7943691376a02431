use k8_manifest::schema::Attribute;
use k8_manifest::schema::AttributeType;
use k8_manifest::types::Crd;
use k8_manifest::types::CrdNames;
use k8_manifest::types::Scope;
use k8_manifest::ResourceDefinition;

use super::GROUP;
use super::V1;

const IMAGE: &[Attribute] = &[
    Attribute::required(
        "image",
        AttributeType::String,
        "Image is an image that the operator deploys and instead of using the built in tag the operator will use the Digest for the image identifier. The value should be the image name without registry or tag or digest.",
    ),
    Attribute::required(
        "digest",
        AttributeType::String,
        "Digest is the image identifier that will be used for the Image. The field should not include a leading '@' and must be prefixed with 'sha256:'.",
    ),
];

const SPEC: &[Attribute] = &[Attribute::optional(
    "images",
    AttributeType::List(&AttributeType::Object(IMAGE)),
    "Images is the list of images to use digests. All images that the operator will deploy must be specified.",
)];

pub static IMAGE_SET: ResourceDefinition = ResourceDefinition::new(
    Crd {
        group: GROUP,
        version: V1,
        names: CrdNames {
            kind: "ImageSet",
            plural: "imagesets",
            singular: "imageset",
        },
        scope: Scope::Cluster,
    },
    "ImageSet is used to specify image digests for the images that the operator deploys. The name of the ImageSet is expected to be in the format '<variant>-<release>'.",
    Attribute::optional(
        "spec",
        AttributeType::Object(SPEC),
        "ImageSetSpec defines the desired state of ImageSet.",
    ),
);
