// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Canned advisory text per plant-health class
//!
//! Pure data keyed by class name. Class names are open string data owned by
//! the model file, so lookups stay string-keyed with a placeholder fallback
//! instead of a closed enum.

/// Returned for any class the tables do not know
pub const UNKNOWN_CLASS_INFO: &str = "Informasi tidak tersedia untuk penyakit ini.";

/// Descriptive text for a detected plant-health class
pub fn disease_message(class_name: &str) -> &'static str {
    match class_name {
        "virus_kuning" => {
            "Virus kuning (Yellow Virus) sering menyerang tanaman cabai dan menyebabkan daun \
             tanaman menguning, mengerut, dan pertumbuhan tanaman terhambat. Virus ini disebarkan \
             oleh serangga vektor seperti kutu kebul (Bemisia tabaci)"
        }
        "thrips" => {
            "Thrips adalah serangga kecil yang menyerang daun, bunga, dan buah tanaman cabai, \
             menyebabkan bercak-bercak perak dan deformasi pada tanaman. Thrips menyebar dengan \
             cepat dalam kondisi cuaca kering dan panas. Mereka sering tersembunyi di dalam bunga \
             dan lipatan daun, membuatnya sulit dideteksi pada tahap awal."
        }
        "bercak_daun" => {
            "Bercak daun pada tanaman cabai dapat disebabkan oleh berbagai patogen seperti jamur \
             dan bakteri. Gejala yang ditimbulkan berupa bercak-bercak coklat atau hitam pada daun \
             yang dapat menyebabkan daun menguning dan rontok. Biasanya di sebabkan oleh jamur \
             seperti Alternaria solani dan Cercospora capsici atau bakteri biasanya seperti \
             Xanthomonas campestris."
        }
        "sehat" => {
            "Tanaman cabai anda sehat. Lanjutkan perawatan dengan baik untuk menjaga kesehatannya."
        }
        _ => UNKNOWN_CLASS_INFO,
    }
}

/// Treatment advice for a detected plant-health class
///
/// The healthy class (`sehat`) has no treatment entry on purpose; it falls
/// through to the placeholder like any unknown class.
pub fn treatment_advice(class_name: &str) -> &'static str {
    match class_name {
        "virus_kuning" => {
            "Penanggulangan virus kuning pada tanaman cabai melibatkan beberapa langkah. Pertama, \
             penting untuk mengendalikan serangga vektor seperti kutu kebul yang menyebarkan virus \
             ini, dengan menggunakan insektisida. Selain itu, penggunaan mulsa plastik dapat \
             membantu mengurangi populasi serangga tersebut. Melindungi tanaman dengan jaring \
             anti-serangga juga efektif dalam mencegah serangga vektor mencapai tanaman. Menanam \
             varietas cabai yang tahan terhadap virus kuning dan melakukan rotasi tanaman dengan \
             jenis tanaman yang tidak rentan terhadap virus ini juga merupakan langkah pencegahan \
             yang baik."
        }
        "thrips" => {
            "Untuk mengendalikan thrips pada tanaman cabai, insektisida sistemik atau kontak dapat \
             digunakan untuk mengurangi populasi thrips. Pemantauan rutin tanaman untuk mendeteksi \
             keberadaan thrips pada tahap awal sangat penting. Penggunaan perangkap kuning \
             berperekat dapat menarik dan menangkap thrips. Selain itu, pengendalian biologis \
             dengan menggunakan musuh alami seperti predator dan parasitoid dapat membantu \
             mengendalikan populasi thrips. Menjaga kebersihan lahan tanam dan mengurangi \
             kelembaban juga merupakan langkah penting dalam pengendalian thrips."
        }
        "bercak_daun" => {
            "Penanggulangan bercak daun pada tanaman cabai melibatkan aplikasi fungisida untuk \
             mengendalikan penyakit yang disebabkan oleh jamur. Menjaga kebersihan lahan dan \
             menghindari kelembaban berlebih yang dapat memicu pertumbuhan jamur juga penting. \
             Melakukan rotasi tanaman dengan jenis tanaman yang tidak rentan terhadap bercak daun \
             dapat mencegah penyebaran penyakit. Menanam varietas cabai yang tahan terhadap \
             penyakit ini juga sangat dianjurkan. Jika bercak daun disebabkan oleh bakteri, \
             aplikasi bakterisida dapat membantu mengendalikan penyakit tersebut."
        }
        _ => UNKNOWN_CLASS_INFO,
    }
}
